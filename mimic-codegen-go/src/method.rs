//! Mock method synthesis.
//!
//! Each interface method becomes a method on the mock struct that records
//! the call through testify and extracts every result from the recorded
//! arguments:
//!
//! ```go
//! func (_m *StringServiceMock) Concat(a string, b string) string {
//! 	ret := _m.Called(a, b)
//!
//! 	var r0 string
//! 	if rf, ok := ret.Get(0).(func(string, string) string); ok {
//! 		r0 = rf(a, b)
//! 	} else {
//! 		r0 = ret.Get(0).(string)
//! 	}
//!
//! 	return r0
//! }
//! ```

use std::collections::HashSet;

use mimic_ir::{MethodDescriptor, ParamDescriptor};

use crate::{
    ast::{FuncDecl, Param, Stmt},
    classifier::ResultKind,
    naming::GO_NAMING,
    type_renderer::{TypeRenderer, func_type},
};

/// Identifiers visible in one generated method.
#[derive(Debug, Default)]
struct Scope {
    taken: HashSet<String>,
}

impl Scope {
    fn new(reserved: impl IntoIterator<Item = String>) -> Self {
        Self {
            taken: reserved.into_iter().collect(),
        }
    }

    /// Declare a user-visible name, appending `_` until it is free.
    fn declare(&mut self, mut name: String) -> String {
        while self.taken.contains(&name) {
            name.push('_');
        }
        self.taken.insert(name.clone());
        name
    }

    /// Declare a generated local, prefixing `_` until it is free.
    fn local(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        while self.taken.contains(&name) {
            name.insert(0, '_');
        }
        self.taken.insert(name.clone());
        name
    }
}

fn param_names(params: &[ParamDescriptor], scope: &mut Scope) -> Vec<String> {
    params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let base = if param.is_named() {
                GO_NAMING.safe_name(&param.name)
            } else {
                format!("a{}", i)
            };
            scope.declare(base)
        })
        .collect()
}

/// Names for the result list. Empty strings leave the list unnamed.
fn result_names(results: &[ParamDescriptor], scope: &mut Scope) -> Vec<String> {
    if !results.iter().any(ParamDescriptor::is_named) {
        return vec![String::new(); results.len()];
    }

    results
        .iter()
        .map(|result| {
            if result.is_named() {
                scope.declare(GO_NAMING.safe_name(&result.name))
            } else {
                "_".to_string()
            }
        })
        .collect()
}

/// Synthesize the mock implementation of one interface method.
pub fn synthesize_method(
    renderer: &mut TypeRenderer<'_>,
    interface_name: &str,
    mock_struct_name: &str,
    method: &MethodDescriptor,
) -> FuncDecl {
    tracing::trace!(method = %method.name, "synthesizing method");

    let param_types: Vec<String> = method
        .params
        .iter()
        .map(|param| renderer.render(&param.ty))
        .collect();
    let result_types: Vec<String> = method
        .results
        .iter()
        .map(|result| renderer.render(&result.ty))
        .collect();

    // Parameter names must not shadow aliases or type names the body refers to.
    let mut scope = Scope::new(renderer.take_used_idents());
    let params = param_names(&method.params, &mut scope);
    let results = result_names(&method.results, &mut scope);

    let recv = scope.local("_m");
    let ret = scope.local("ret");
    let rf = scope.local("rf");
    let ok = scope.local("ok");
    let vars: Vec<String> = (0..method.results.len())
        .map(|i| scope.local(&format!("r{}", i)))
        .collect();

    let mut decl = FuncDecl::new(&method.name)
        .doc(format!(
            "{} provides a mock function for method {} of interface {}.",
            method.name, method.name, interface_name
        ))
        .receiver(Param::new(&recv, format!("*{}", mock_struct_name)));
    for (name, ty) in params.iter().zip(&param_types) {
        decl = decl.param(Param::new(name, ty));
    }
    for (name, ty) in results.iter().zip(&result_types) {
        decl = decl.result(Param::new(name, ty));
    }

    let called = format!("{}.Called({})", recv, params.join(", "));
    if method.results.is_empty() {
        return decl.stmt(Stmt::expr(called));
    }

    let mut override_args = params.clone();
    if method.is_variadic()
        && let Some(last) = override_args.last_mut()
    {
        last.push_str("...");
    }
    let override_call = format!("{}({})", rf, override_args.join(", "));

    decl = decl.stmt(Stmt::define(&ret, called)).stmt(Stmt::Blank);

    for (i, result) in method.results.iter().enumerate() {
        let kind = ResultKind::classify(&result.ty);
        tracing::trace!(method = %method.name, index = i, %kind, "classified result");

        let var = &vars[i];
        let ty = &result_types[i];
        let get = format!("{}.Get({})", ret, i);

        let extract = match kind {
            ResultKind::Error => Stmt::assign(var, format!("{}.Error({})", ret, i)),
            ResultKind::Nillable => Stmt::if_(
                format!("{} != nil", get),
                vec![Stmt::assign(var, format!("{}.({})", get, ty))],
            ),
            ResultKind::Value => Stmt::assign(var, format!("{}.({})", get, ty)),
        };

        let override_ty = func_type(&param_types, std::slice::from_ref(ty));
        decl = decl
            .stmt(Stmt::var(var, ty))
            .stmt(
                Stmt::if_(&ok, vec![Stmt::assign(var, &override_call)])
                    .with_init(format!("{}, {} := {}.({})", rf, ok, get, override_ty))
                    .with_else(vec![extract]),
            )
            .stmt(Stmt::Blank);
    }

    decl.stmt(Stmt::ret(vars))
}
