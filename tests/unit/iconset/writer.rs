use std::collections::BTreeSet;

use super::*;
use crate::icon::builtin::default_icon;
use crate::render::backend::RasterImage;

struct FailingRenderer(fn() -> IconError);

impl IconRenderer for FailingRenderer {
    fn render(&mut self, _: &IconDescriptor, _: u32, _: u32) -> IconResult<RasterImage> {
        Err((self.0)())
    }
}

fn marketing_spec() -> SizeSpec {
    let idioms: BTreeSet<Idiom> = [Idiom::Marketing].into_iter().collect();
    let table = SizeTable::for_idioms(&idioms);
    *table.renderable().next().unwrap()
}

#[test]
fn render_failures_name_the_file_once() {
    let mut backend = FailingRenderer(|| IconError::render("target too large"));
    let err = render_entry(&mut backend, &default_icon(), &marketing_spec())
        .err()
        .unwrap();
    assert!(matches!(err, IconError::Render(_)));
    assert_eq!(
        err.to_string(),
        "render error: AppIcon-ios-marketing-1024x1024.png: target too large"
    );
}

#[test]
fn non_render_failures_pass_through_unchanged() {
    let mut backend = FailingRenderer(|| IconError::encode("no encoder"));
    let err = render_entry(&mut backend, &default_icon(), &marketing_spec())
        .err()
        .unwrap();
    assert_eq!(err.to_string(), "encode error: no encoder");
}
