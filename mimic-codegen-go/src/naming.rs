//! Go naming conventions and the mock naming resolver.

use mimic_codegen::{NamingConvention, expand_template};
use mimic_core::to_snake_case;
use mimic_params::GeneratorParams;

fn escape_go_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    type_to_file: to_snake_case,
    reserved_words: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    escape_reserved: escape_go_reserved,
};

/// Identifier of the generated mock type.
///
/// `mock_struct_name_template` receives the interface name; an empty
/// template means `%sMock`.
pub fn mock_struct_name(params: &GeneratorParams) -> String {
    expand_template(params.mock_struct_name_template(), &params.interface_name)
}

/// Output path of the generated file.
///
/// `out_path_template` receives the interface name in snake_case.
pub fn output_path(params: &GeneratorParams) -> String {
    expand_template(
        &params.out_path_template,
        &GO_NAMING.file_name(&params.interface_name),
    )
}
