//! Mock struct synthesis.

use mimic_ir::InterfaceDescriptor;

use crate::{
    ast::{Decl, Field, StructType},
    imports::MOCK_PACKAGE,
    method::synthesize_method,
    type_renderer::TypeRenderer,
};

/// Synthesize the mock struct declaration followed by one method per
/// interface method, in interface order.
pub fn synthesize_structure(
    renderer: &mut TypeRenderer<'_>,
    interface: &InterfaceDescriptor,
    mock_struct_name: &str,
) -> Vec<Decl> {
    // Registered first so testify always gets the `mock` alias.
    let embedded = renderer.qualified(MOCK_PACKAGE, "Mock");
    renderer.take_used_idents();

    let mut decls = Vec::with_capacity(interface.methods.len() + 1);
    decls.push(Decl::from(
        StructType::new(mock_struct_name)
            .doc(format!(
                "{} is an autogenerated mock type for the {} interface.",
                mock_struct_name, interface.name
            ))
            .field(Field::embedded(embedded)),
    ));

    for method in &interface.methods {
        decls.push(Decl::from(synthesize_method(
            renderer,
            &interface.name,
            mock_struct_name,
            method,
        )));
    }

    decls
}

#[cfg(test)]
mod tests {
    use mimic_ir::{MethodDescriptor, TypeDescriptor};

    use super::*;

    const PKG: &str = "example.com/svc";

    #[test]
    fn test_zero_methods_yields_type_only() {
        let mut renderer = TypeRenderer::new(PKG, PKG);
        let decls =
            synthesize_structure(&mut renderer, &InterfaceDescriptor::new("Empty"), "EmptyMock");
        assert_eq!(decls.len(), 1);
        match &decls[0] {
            Decl::Struct(decl) => {
                assert_eq!(decl.name(), "EmptyMock");
                assert_eq!(decl.fields(), &[Field::embedded("mock.Mock")]);
            }
            other => panic!("expected struct, got {:?}", other),
        }
        assert_eq!(renderer.imports().get(MOCK_PACKAGE), Some("mock"));
    }

    #[test]
    fn test_methods_in_interface_order() {
        let iface = InterfaceDescriptor::new("Svc")
            .method(MethodDescriptor::new("Zeta"))
            .method(MethodDescriptor::new("Alpha"))
            .method(MethodDescriptor::new("Zeta"));
        let mut renderer = TypeRenderer::new(PKG, PKG);
        let decls = synthesize_structure(&mut renderer, &iface, "SvcMock");
        let names: Vec<&str> = decls
            .iter()
            .filter_map(|decl| match decl {
                Decl::Func(func) => Some(func.name()),
                Decl::Struct(_) => None,
            })
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_mock_alias_deduplicates_user_package() {
        let iface = InterfaceDescriptor::new("Svc").method(
            MethodDescriptor::new("Get").result(mimic_ir::ParamDescriptor::unnamed(
                TypeDescriptor::named("example.com/other/mock", "Thing"),
            )),
        );
        let mut renderer = TypeRenderer::new(PKG, PKG);
        synthesize_structure(&mut renderer, &iface, "SvcMock");
        assert_eq!(renderer.imports().get(MOCK_PACKAGE), Some("mock"));
        assert_eq!(renderer.imports().get("example.com/other/mock"), Some("mock1"));
    }
}
