//! Descriptor validation.
//!
//! Errors mark descriptors the synthesizer cannot render. Warnings mark
//! input that renders but is probably not what the author meant.

use std::collections::HashSet;

use mimic_codegen::Diagnostic;
use mimic_ir::{InterfaceDescriptor, MethodDescriptor, TypeDescriptor};

/// Deepest type nesting accepted.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Check an interface descriptor, returning every problem found.
pub fn validate(interface: &InterfaceDescriptor) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    if interface.name.trim().is_empty() {
        diags.push(Diagnostic::error("interface has an empty name"));
    }
    if interface.methods.is_empty() {
        diags.push(Diagnostic::info("interface has no methods").at(&interface.name));
    }

    let mut seen = HashSet::new();
    for (i, method) in interface.methods.iter().enumerate() {
        let location = if method.name.is_empty() {
            diags.push(
                Diagnostic::error("method has an empty name")
                    .at(format!("{}.methods[{}]", interface.name, i)),
            );
            format!("{}.methods[{}]", interface.name, i)
        } else {
            if !seen.insert(method.name.as_str()) {
                diags.push(
                    Diagnostic::warning(format!("method '{}' is declared twice", method.name))
                        .at(&interface.name),
                );
            }
            format!("{}.{}", interface.name, method.name)
        };

        check_method(method, &location, &mut diags);
    }

    diags
}

fn check_method(method: &MethodDescriptor, location: &str, diags: &mut Vec<Diagnostic>) {
    let last = method.params.len().saturating_sub(1);
    for (i, param) in method.params.iter().enumerate() {
        check_type(
            &param.ty,
            &format!("{}.params[{}]", location, i),
            i == last,
            diags,
        );
    }
    for (i, result) in method.results.iter().enumerate() {
        check_type(&result.ty, &format!("{}.results[{}]", location, i), false, diags);
    }

    let named = method.results.iter().filter(|r| r.is_named()).count();
    if named > 0 && named < method.results.len() {
        diags.push(
            Diagnostic::warning("results mix named and unnamed entries; unnamed ones become '_'")
                .at(location),
        );
    }

    let param_names: HashSet<&str> = method
        .params
        .iter()
        .filter(|p| p.is_named())
        .map(|p| p.name.as_str())
        .collect();
    for (i, result) in method.results.iter().enumerate() {
        if !result.is_named() {
            continue;
        }
        let positional = (0..method.results.len()).any(|j| result.name == format!("r{}", j));
        if param_names.contains(result.name.as_str()) || positional {
            diags.push(
                Diagnostic::warning(format!(
                    "result name '{}' collides with a parameter or generated name and will be renamed",
                    result.name
                ))
                .at(format!("{}.results[{}]", location, i)),
            );
        }
    }
}

fn check_type(ty: &TypeDescriptor, location: &str, variadic_ok: bool, diags: &mut Vec<Diagnostic>) {
    if ty.depth() > MAX_TYPE_DEPTH {
        diags.push(
            Diagnostic::error(format!("type nests deeper than {} levels", MAX_TYPE_DEPTH))
                .at(location),
        );
        return;
    }
    walk(ty, location, variadic_ok, diags);
}

fn walk(ty: &TypeDescriptor, location: &str, variadic_ok: bool, diags: &mut Vec<Diagnostic>) {
    match ty {
        TypeDescriptor::Named { name, .. } if name.trim().is_empty() => {
            diags.push(Diagnostic::error("named type has an empty name").at(location));
        }
        TypeDescriptor::Builtin { name } if name.trim().is_empty() => {
            diags.push(Diagnostic::error("builtin type has an empty name").at(location));
        }
        TypeDescriptor::Variadic { elem } => {
            if !variadic_ok {
                diags.push(
                    Diagnostic::error("variadic type is only allowed as the last parameter")
                        .at(location),
                );
            }
            walk(elem, location, false, diags);
        }
        TypeDescriptor::Func { params, results } => {
            let last = params.len().saturating_sub(1);
            for (i, param) in params.iter().enumerate() {
                walk(param, location, i == last, diags);
            }
            for result in results {
                walk(result, location, false, diags);
            }
        }
        other => {
            for child in other.children() {
                walk(child, location, false, diags);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mimic_codegen::Severity;
    use mimic_ir::ParamDescriptor;

    use super::*;

    fn errors(diags: &[Diagnostic]) -> Vec<String> {
        diags
            .iter()
            .filter(|d| d.severity.is_error())
            .map(|d| d.to_string())
            .collect()
    }

    fn iface(method: MethodDescriptor) -> InterfaceDescriptor {
        InterfaceDescriptor::new("Svc").method(method)
    }

    #[test]
    fn test_valid_interface() {
        let diags = validate(&iface(
            MethodDescriptor::new("Concat")
                .param(ParamDescriptor::new("a", TypeDescriptor::string()))
                .param(ParamDescriptor::new(
                    "rest",
                    TypeDescriptor::variadic(TypeDescriptor::string()),
                ))
                .result(ParamDescriptor::unnamed(TypeDescriptor::string())),
        ));
        assert!(diags.is_empty(), "{:?}", diags);
    }

    #[test]
    fn test_empty_interface_is_info() {
        let diags = validate(&InterfaceDescriptor::new("Empty"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Info);
    }

    #[test]
    fn test_empty_names() {
        let diags = validate(&iface(
            MethodDescriptor::new("")
                .param(ParamDescriptor::new("a", TypeDescriptor::named("x.com/y", "")))
                .result(ParamDescriptor::unnamed(TypeDescriptor::builtin(""))),
        ));
        assert_eq!(
            errors(&diags),
            vec![
                "error: method has an empty name (at Svc.methods[0])",
                "error: named type has an empty name (at Svc.methods[0].params[0])",
                "error: builtin type has an empty name (at Svc.methods[0].results[0])",
            ]
        );
    }

    #[test]
    fn test_misplaced_variadic() {
        let diags = validate(&iface(
            MethodDescriptor::new("Bad")
                .param(ParamDescriptor::new(
                    "a",
                    TypeDescriptor::variadic(TypeDescriptor::string()),
                ))
                .param(ParamDescriptor::new(
                    "b",
                    TypeDescriptor::slice(TypeDescriptor::variadic(TypeDescriptor::string())),
                ))
                .result(ParamDescriptor::unnamed(TypeDescriptor::variadic(
                    TypeDescriptor::string(),
                ))),
        ));
        assert_eq!(
            errors(&diags),
            vec![
                "error: variadic type is only allowed as the last parameter (at Svc.Bad.params[0])",
                "error: variadic type is only allowed as the last parameter (at Svc.Bad.params[1])",
                "error: variadic type is only allowed as the last parameter (at Svc.Bad.results[0])",
            ]
        );
    }

    #[test]
    fn test_variadic_inside_func_type() {
        let ok = TypeDescriptor::func(
            vec![TypeDescriptor::string(), TypeDescriptor::variadic(TypeDescriptor::string())],
            vec![],
        );
        let bad = TypeDescriptor::func(
            vec![TypeDescriptor::variadic(TypeDescriptor::string()), TypeDescriptor::string()],
            vec![],
        );
        let diags = validate(&iface(
            MethodDescriptor::new("F")
                .param(ParamDescriptor::new("ok", ok))
                .param(ParamDescriptor::new("bad", bad)),
        ));
        assert_eq!(
            errors(&diags),
            vec!["error: variadic type is only allowed as the last parameter (at Svc.F.params[1])"]
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut ty = TypeDescriptor::string();
        for _ in 0..MAX_TYPE_DEPTH {
            ty = TypeDescriptor::pointer(ty);
        }
        let diags = validate(&iface(
            MethodDescriptor::new("Deep").result(ParamDescriptor::unnamed(ty)),
        ));
        assert_eq!(
            errors(&diags),
            vec!["error: type nests deeper than 64 levels (at Svc.Deep.results[0])"]
        );
    }

    #[test]
    fn test_result_name_warnings() {
        let diags = validate(&iface(
            MethodDescriptor::new("Get")
                .param(ParamDescriptor::new("id", TypeDescriptor::string()))
                .result(ParamDescriptor::new("id", TypeDescriptor::string()))
                .result(ParamDescriptor::new("r0", TypeDescriptor::string()))
                .result(ParamDescriptor::unnamed(TypeDescriptor::error())),
        ));
        let warnings: Vec<String> = diags
            .iter()
            .filter(|d| d.severity.is_warning())
            .map(|d| d.to_string())
            .collect();
        assert_eq!(warnings.len(), 3, "{:?}", warnings);
        assert!(warnings[0].contains("mix named and unnamed"));
        assert!(warnings[1].contains("'id'"));
        assert!(warnings[2].contains("'r0'"));
        assert!(errors(&diags).is_empty());
    }

    #[test]
    fn test_duplicate_method_warning() {
        let diags = validate(
            &InterfaceDescriptor::new("Svc")
                .method(MethodDescriptor::new("Get"))
                .method(MethodDescriptor::new("Get")),
        );
        assert_eq!(diags.len(), 1);
        assert!(diags[0].severity.is_warning());
    }
}
