use std::collections::HashSet;

use super::*;

fn idioms(list: &[Idiom]) -> BTreeSet<Idiom> {
    list.iter().copied().collect()
}

fn spec(idiom: Idiom, side: f64, scale: Scale) -> SizeSpec {
    SizeSpec {
        idiom,
        width: side,
        height: side,
        scale,
        placeholder: false,
    }
}

#[test]
fn filenames_follow_appicon_pattern() {
    assert_eq!(
        spec(Idiom::Tablet, 76.0, Scale::Two).filename().as_deref(),
        Some("AppIcon-ipad-76x76@2x.png")
    );
    assert_eq!(
        spec(Idiom::Tablet, 83.5, Scale::Two).filename().as_deref(),
        Some("AppIcon-ipad-83.5x83.5@2x.png")
    );
    assert_eq!(
        spec(Idiom::Marketing, 1024.0, Scale::One)
            .filename()
            .as_deref(),
        Some("AppIcon-ios-marketing-1024x1024.png")
    );
    assert_eq!(
        spec(Idiom::Phone, 60.0, Scale::Three).filename().as_deref(),
        Some("AppIcon-iphone-60x60@3x.png")
    );
    assert_eq!(
        spec(Idiom::Desktop, 16.0, Scale::One).filename().as_deref(),
        Some("AppIcon-mac-16x16.png")
    );
}

#[test]
fn placeholders_have_no_filename() {
    let mut s = spec(Idiom::Tablet, 20.0, Scale::One);
    s.placeholder = true;
    assert_eq!(s.filename(), None);
    assert_eq!(s.size_string(), "20x20");
}

#[test]
fn dimension_formatting_drops_trailing_zeros_only_for_integers() {
    assert_eq!(format_dimension(76.0), "76");
    assert_eq!(format_dimension(83.5), "83.5");
    assert_eq!(format_dimension(1024.0), "1024");
    assert_eq!(format_dimension(20.0004), "20");
    assert_eq!(format_dimension(12.34), "12.3");
}

#[test]
fn pixel_size_multiplies_by_scale() {
    assert_eq!(spec(Idiom::Tablet, 83.5, Scale::Two).pixel_size(), (167, 167));
    assert_eq!(spec(Idiom::Phone, 20.0, Scale::Three).pixel_size(), (60, 60));
    assert_eq!(
        spec(Idiom::Marketing, 1024.0, Scale::One).pixel_size(),
        (1024, 1024)
    );
}

#[test]
fn every_idiom_is_always_present() {
    let requests = [
        idioms(&[]),
        idioms(&[Idiom::Marketing]),
        idioms(&[Idiom::Phone, Idiom::Marketing]),
        idioms(&[Idiom::Tablet, Idiom::Marketing]),
        idioms(&Idiom::ALL),
    ];
    for req in &requests {
        let table = SizeTable::for_idioms(req);
        assert_eq!(table.entries().len(), 28);
        for idiom in Idiom::ALL {
            let entries: Vec<_> = table
                .entries()
                .iter()
                .filter(|e| e.idiom == idiom)
                .collect();
            assert!(!entries.is_empty(), "{idiom} missing for {req:?}");
            for e in entries {
                assert_eq!(e.placeholder, !req.contains(&idiom));
                assert_eq!(e.filename().is_none(), e.placeholder);
            }
        }
    }
}

#[test]
fn phone_request_renders_phone_and_marketing_only() {
    let table = SizeTable::for_idioms(&idioms(&[Idiom::Phone, Idiom::Marketing]));
    let names: Vec<String> = table.renderable().filter_map(|e| e.filename()).collect();
    assert_eq!(
        names,
        vec![
            "AppIcon-iphone-20x20@2x.png",
            "AppIcon-iphone-20x20@3x.png",
            "AppIcon-iphone-29x29@2x.png",
            "AppIcon-iphone-29x29@3x.png",
            "AppIcon-iphone-40x40@2x.png",
            "AppIcon-iphone-40x40@3x.png",
            "AppIcon-iphone-60x60@2x.png",
            "AppIcon-iphone-60x60@3x.png",
            "AppIcon-ios-marketing-1024x1024.png",
        ]
    );
}

#[test]
fn keys_and_filenames_are_unique() {
    let table = SizeTable::for_idioms(&idioms(&Idiom::ALL));
    let keys: HashSet<_> = table.entries().iter().map(SizeSpec::key).collect();
    assert_eq!(keys.len(), table.entries().len());
    let names: HashSet<_> = table.entries().iter().filter_map(|e| e.filename()).collect();
    assert_eq!(names.len(), table.entries().len());
}

#[test]
fn idiom_and_scale_serialize_as_catalog_strings() {
    assert_eq!(
        serde_json::to_string(&Idiom::Marketing).unwrap(),
        "\"ios-marketing\""
    );
    assert_eq!(serde_json::to_string(&Scale::Three).unwrap(), "\"3x\"");
    for idiom in Idiom::ALL {
        assert_eq!(
            serde_json::to_string(&idiom).unwrap(),
            format!("\"{idiom}\"")
        );
    }
}
