use crate::foundation::core::{Affine, Color, Size};
use crate::foundation::error::IconResult;
use crate::foundation::scale::CanvasScale;
use crate::icon::layout::{IconLayout, layout_icon};
use crate::icon::model::IconDescriptor;
use crate::render::backend::{IconRenderer, RasterImage, RenderSettings, check_target_size};

/// Ratio between icon dimension and home-screen corner radius.
const HOME_SCREEN_RADIUS_FACTOR: f64 = 4.3;

/// CPU backend powered by `vello_cpu`.
pub struct CpuRenderer {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    /// Create a renderer with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> IconResult<R>,
    ) -> IconResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl IconRenderer for CpuRenderer {
    #[tracing::instrument(skip(self, icon))]
    fn render(
        &mut self,
        icon: &IconDescriptor,
        width: u32,
        height: u32,
    ) -> IconResult<RasterImage> {
        let (w, h) = check_target_size(width, height)?;
        let scale = CanvasScale::for_pixels(width.min(height));
        let layout = layout_icon(
            icon,
            Size::new(f64::from(width), f64::from(height)),
            scale,
        );
        let settings = self.settings;

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |ctx| {
            draw_layout(ctx, &layout, settings);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        tracing::debug!(width, height, shapes = layout.shapes.len(), "rendered icon");
        Ok(RasterImage {
            width,
            height,
            data,
        })
    }
}

fn draw_layout(ctx: &mut vello_cpu::RenderContext, layout: &IconLayout, settings: RenderSettings) {
    let canvas = layout.canvas;
    let canvas_rect = vello_cpu::kurbo::Rect::new(canvas.x0, canvas.y0, canvas.x1, canvas.y1);

    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    if let Some([r, g, b, a]) = settings.clear_rgba {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&canvas_rect);
    }

    if settings.home_screen_mask {
        let radius = canvas.width().min(canvas.height()) / HOME_SCREEN_RADIUS_FACTOR;
        let outline = kurbo::Shape::to_path(&kurbo::RoundedRect::from_rect(canvas, radius), 0.1);
        ctx.push_clip_layer(&bezpath_to_cpu(&outline));
    }

    ctx.set_paint(to_cpu_color(layout.background));
    ctx.fill_rect(&canvas_rect);

    for shape in &layout.shapes {
        ctx.set_transform(affine_to_cpu(shape.transform()));
        ctx.set_paint(to_cpu_color(shape.fill));
        ctx.fill_path(&bezpath_to_cpu(&shape.outline()));
    }

    if settings.home_screen_mask {
        ctx.pop_layer();
    }
}

fn to_cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// `vello_cpu` pixmaps are premultiplied; PNG wants straight alpha.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
