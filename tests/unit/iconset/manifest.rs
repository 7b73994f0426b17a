use std::collections::BTreeSet;

use super::*;

fn phone_only() -> SizeTable {
    let idioms: BTreeSet<Idiom> = [Idiom::Phone, Idiom::Marketing].into_iter().collect();
    SizeTable::for_idioms(&idioms)
}

#[test]
fn manifest_lists_every_entry_and_omits_placeholder_filenames() {
    let table = phone_only();
    let manifest = Manifest::from_table(&table);
    assert_eq!(manifest.images.len(), table.entries().len());

    for img in &manifest.images {
        match img.idiom {
            Idiom::Phone | Idiom::Marketing => assert!(img.filename.is_some(), "{img:?}"),
            Idiom::Tablet | Idiom::Desktop => assert!(img.filename.is_none(), "{img:?}"),
        }
    }
    assert_eq!(manifest.filenames().count(), 9);
}

#[test]
fn json_schema_matches_asset_catalog_layout() {
    let bytes = Manifest::from_table(&phone_only()).to_json_bytes().unwrap();
    assert_eq!(bytes.last(), Some(&b'\n'));

    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let images = v["images"].as_array().unwrap();

    let ipad = images
        .iter()
        .find(|i| i["idiom"] == "ipad" && i["size"] == "83.5x83.5")
        .unwrap();
    assert_eq!(ipad["scale"], "2x");
    assert!(ipad.get("filename").is_none());

    let marketing = images
        .iter()
        .find(|i| i["idiom"] == "ios-marketing")
        .unwrap();
    assert_eq!(marketing["size"], "1024x1024");
    assert_eq!(marketing["scale"], "1x");
    assert_eq!(
        marketing["filename"],
        "AppIcon-ios-marketing-1024x1024.png"
    );

    assert_eq!(v["info"]["author"], "xcode");
    assert_eq!(v["info"]["version"], 1);
}

#[test]
fn serialization_is_stable_and_parses_back() {
    let m = Manifest::from_table(&phone_only());
    let a = m.to_json_bytes().unwrap();
    let b = Manifest::from_table(&phone_only()).to_json_bytes().unwrap();
    assert_eq!(a, b);
    assert_eq!(Manifest::from_json_slice(&a).unwrap(), m);
}

#[test]
fn manifest_without_info_block_still_parses() {
    let json = br#"{"images":[{"idiom":"iphone","size":"20x20","scale":"2x"}]}"#;
    let m = Manifest::from_json_slice(json).unwrap();
    assert_eq!(m.images.len(), 1);
    assert_eq!(m.info, ManifestInfo::default());
    assert!(Manifest::from_json_slice(b"[]").is_err());
}
