mod draw_support;

use draw_support::fixture;
use drawgrade::source::extract_cpp;

#[test]
fn last_triple_quoted_block_wins() {
    let text = "A = \"\"\"int first;\"\"\"\nB = \"\"\"int main() { return 0; }\"\"\"\n";
    assert_eq!(extract_cpp(text).as_deref(), Some("int main() { return 0; }"));
}

#[test]
fn empty_triple_quoted_block_yields_nothing() {
    assert_eq!(extract_cpp("CPP = \"\"\"\"\"\"\n# int main()"), None);
}

#[test]
fn hash_markers_delimit_code() {
    let text = "x = 1\n# BEGIN CPP CODE\nint main() {}\n# END CPP CODE\ny = 2\n";
    assert_eq!(extract_cpp(text).as_deref(), Some("\nint main() {}\n"));
}

#[test]
fn slash_markers_delimit_code() {
    let text = "// BEGIN CPP CODE\nint a;\n// END CPP CODE\n\
                // BEGIN CPP CODE\nint b;\n// END CPP CODE\n";
    assert_eq!(extract_cpp(text).as_deref(), Some("\nint b;\n"));
}

#[test]
fn unterminated_marker_region_is_ignored() {
    let text = "# BEGIN CPP CODE\nint a;\n";
    assert_eq!(extract_cpp(text), None);
}

#[test]
fn keywords_mean_the_whole_text_is_code() {
    let text = "#include <iostream>\nint main() { std::cout << 1; }\n";
    assert_eq!(extract_cpp(text).as_deref(), Some(text));
}

#[test]
fn plain_python_has_no_code() {
    let text = std::fs::read_to_string(fixture("no_code_wrapper.py")).unwrap();
    assert_eq!(extract_cpp(&text), None);
}

#[test]
fn wrapper_fixture_yields_its_program() {
    let text = std::fs::read_to_string(fixture("legal_draw_wrapper.py")).unwrap();
    let code = extract_cpp(&text).unwrap();

    assert!(code.contains("int main()"));
    assert!(!code.contains("first block is ignored"));
}
