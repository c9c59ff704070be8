//! Integration tests for the trax pipeline (extract + generate)

use trax::ast::{DataType, Declaration};
use trax::{TransformError, diagnostics, extract, generate};

const HEADER: &str = "import { Data } from \"./trax\";\n\n";

fn data_unit(body: &str) -> String {
    format!("{HEADER}@Data class Model {{\n{body}}}\n")
}

fn companion_count(output: &str, name: &str, ty: &str) -> usize {
    output.matches(&format!(" {name}: {ty};")).count()
}

// ============================================================================
// Successful transformations
// ============================================================================

#[test]
fn test_concrete_street_scenario() {
    let source = "import { Data } from \"./trax\";\n\n@Data class Address {\n    street: string;\n}\n";
    let output = generate(source, "address.ts").unwrap();
    assert_eq!(
        output,
        "import { ΔfStr, Δp } from \"./trax\";\n\n@ΔD() class Address {\n    ΔΔstreet: string; @Δp(ΔfStr) street: string;\n}\n"
    );
}

#[test]
fn test_unit_without_data_objects_is_unchanged() {
    let source = format!("{HEADER}export function area(w: number, h: number) {{\n    return w * h;\n}}\n");
    assert_eq!(generate(&source, "area.ts").unwrap(), source);
}

#[test]
fn test_unit_without_marker_is_unchanged() {
    let source = "import { Other } from \"./other\";\nclass Plain {\n    constructor() {}\n}\n";
    assert_eq!(generate(source, "plain.ts").unwrap(), source);
}

#[test]
fn test_factory_symbols_are_deduplicated() {
    let source = data_unit("    a: string;\n    b: string;\n    c: number;\n    d: string;\n");
    let output = generate(&source, "model.ts").unwrap();
    assert!(output.starts_with("import { ΔfStr, Δp, ΔfNbr } from"));
    for name in ["a", "b", "d"] {
        assert_eq!(companion_count(&output, name, "string"), 1, "{name}");
    }
    assert_eq!(companion_count(&output, "c", "number"), 1);
}

#[test]
fn test_symbols_keep_first_use_order_across_objects() {
    let source = format!("{HEADER}@Data class A {{ on: boolean; }}\n@Data class B {{ n: number; s: string; on: boolean; }}\n");
    let output = generate(&source, "ab.ts").unwrap();
    assert!(output.starts_with("import { ΔfBool, Δp, ΔfNbr, ΔfStr } from"), "{output}");
}

#[test]
fn test_already_imported_symbols_are_not_repeated() {
    let source = "import { Data, Δp, ΔfStr } from \"./trax\";\n@Data class A { x: string; y: number; }\n";
    let output = generate(source, "a.ts").unwrap();
    assert!(output.starts_with("import { ΔfNbr, Δp, ΔfStr } from"), "{output}");
}

#[test]
fn test_terminator_added_only_when_missing() {
    let source = data_unit("    a: string;\n    b: string   \n    c: number ;  \n");
    let output = generate(&source, "model.ts").unwrap();
    assert!(output.contains("ΔΔa: string; @Δp(ΔfStr) a: string;\n"));
    assert!(output.contains("ΔΔb: string; @Δp(ΔfStr) b: string;   \n"));
    assert!(output.contains("ΔΔc: number ; @Δp(ΔfNbr) c: number;  \n"));
    assert!(!output.contains(";;"));
}

#[test]
fn test_properties_keep_source_order() {
    let source = data_unit("    zeta: string;\n    alpha: number;\n    mid = true;\n");
    let output = generate(&source, "model.ts").unwrap();
    let positions: Vec<usize> = ["@Δp(ΔfStr) zeta", "@Δp(ΔfNbr) alpha", "@Δp(ΔfBool) mid"]
        .iter()
        .map(|needle| output.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_marker_bound_through_alias() {
    let source = "import { Marker as Data } from \"./trax\";\n@Data class A { x: string; }\n";
    let list = extract(source, "a.ts").unwrap().unwrap();
    assert_eq!(list.len(), 2);
    let Declaration::Import(import) = &list[0] else {
        panic!("expected the import first");
    };
    assert!(source[..import.insert_pos].ends_with("Marker as Data"));
}

#[test]
fn test_extract_reports_types_and_defaults() {
    let source = data_unit("    @ref home: Address;\n    count = 7;\n    tags: string[];\n");
    let list = extract(&source, "model.ts").unwrap().unwrap();
    let Declaration::DataObject(obj) = &list[1] else {
        panic!("expected a Data object after the import");
    };
    assert_eq!(obj.class_name, "Model");
    assert!(obj.properties[0].shallow_ref);
    assert_eq!(obj.properties[1].ty, Some(DataType::Number));
    assert_eq!(obj.properties[2].ty.as_ref().map(ToString::to_string).as_deref(), Some("string[]"));
}

#[test]
fn test_dictionary_with_unknown_key_passes_through() {
    let source = data_unit("    d: { [key: symbol]: Item };\n    s: string;\n");
    let output = generate(&source, "model.ts").unwrap();
    assert!(output.contains("    d: { [key: symbol]: Item };\n"), "{output}");
    assert!(output.contains("ΔΔs: string; @Δp(ΔfStr) s: string;"));
    assert!(output.starts_with("import { ΔfStr, Δp } from"));
}

#[test]
fn test_declaration_list_serializes_to_json() {
    let source = data_unit("    street: string;\n");
    let list = extract(&source, "model.ts").unwrap().unwrap();
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json[0]["kind"], "import");
    assert_eq!(json[1]["kind"], "data_object");
    assert_eq!(json[1]["class_name"], "Model");
    assert_eq!(json[1]["properties"][0]["type"]["kind"], "string");
}

// ============================================================================
// Fatal paths: each raises and produces no output
// ============================================================================

#[test]
fn test_constructor_is_rejected() {
    let source = data_unit("    x: string;\n    constructor() {}\n");
    let err = generate(&source, "model.ts").unwrap_err();
    assert!(matches!(err, TransformError::Constructor { .. }));
    assert!(err.to_string().starts_with("Constructors are not authorized"));
}

#[test]
fn test_untyped_property_is_rejected() {
    let source = data_unit("    street;\n");
    let err = generate(&source, "model.ts").unwrap_err();
    assert!(err.to_string().starts_with("Untyped property"));
}

#[test]
fn test_duplicate_marker_import_is_rejected() {
    let source = format!("{HEADER}import {{ Data }} from \"./elsewhere\";\n@Data class A {{ x: string; }}\n");
    let err = generate(&source, "model.ts").unwrap_err();
    assert!(matches!(err, TransformError::DuplicateImport { .. }));
    assert!(err.to_string().starts_with("Duplicate Data import"));
}

#[test]
fn test_anonymous_data_class_is_rejected() {
    let source = format!("{HEADER}export default @Data class {{ x: string; }}\n");
    let err = generate(&source, "model.ts").unwrap_err();
    assert!(matches!(err, TransformError::MissingClassName { .. }));
    assert!(err.to_string().starts_with("Data class name must be defined"));
}

#[test]
fn test_missing_import_is_rejected() {
    let err = generate("@Data class A { x: string; }\n", "model.ts").unwrap_err();
    assert!(matches!(err, TransformError::MissingImport { .. }));
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn test_method_member_is_rejected() {
    let source = data_unit("    get label() { return \"\"; }\n");
    let err = generate(&source, "model.ts").unwrap_err();
    assert!(err.to_string().starts_with("Invalid Data object member"));
}

#[test]
fn test_syntax_error_is_rejected() {
    let err = generate("import { Data } from \"./trax\";\n@Data class A { x: = }\n", "model.ts").unwrap_err();
    assert!(matches!(err, TransformError::Syntax { .. }));
}

#[test]
fn test_rendered_diagnostic_names_file_and_message() {
    let source = data_unit("    constructor() {}\n");
    let err = generate(&source, "model.ts").unwrap_err();
    let rendered = diagnostics::render("model.ts", &source, err);
    assert!(rendered.contains("model.ts"), "{rendered}");
    assert!(rendered.contains("Constructors are not authorized"), "{rendered}");
}
