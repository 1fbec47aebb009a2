//! Map files and directory names in legacy encodings.

use crate::fixtures::Tree;

#[test]
fn windows_1251_map_is_decoded() {
    // "# Город\n### Площадь - square\n" in Windows-1251
    let mut map = b"# \xC3\xEE\xF0\xEE\xE4\n### \xCF\xEB\xEE\xF9\xE0\xE4\xFC - square\n".to_vec();
    map.extend_from_slice(b"\xD2\xE8\xF5\xEE.\n");

    let output = Tree::new().map("Город - city", map).parse().unwrap();
    let square = output.world.locations().get("city/square").unwrap();
    assert_eq!(square.name, "Площадь");
    assert_eq!(square.description, "Тихо.");
}

#[test]
fn utf8_bom_is_stripped() {
    let output = Tree::new()
        .map("Town - town", "\u{FEFF}# Town\n### Square - square\n")
        .parse()
        .unwrap();
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.world.locations().len(), 1);
}

#[test]
fn crlf_line_endings() {
    let output = Tree::new()
        .map("Town - town", "# Town\r\n### Square - square\r\nText.\r\n")
        .parse()
        .unwrap();
    assert!(output.diagnostics.is_empty());
    let square = output.world.locations().get("town/square").unwrap();
    assert_eq!(square.description, "Text.");
}
