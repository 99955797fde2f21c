//! Document Exporter
//!
//! Lays out the current hero record on a single fixed-template landscape
//! page and writes it as a PDF. The template mirrors the detail view:
//! grey backdrop, portrait scaled to 70% of the page height on the left,
//! name plus label/value pairs centered in the remaining column.
//!
//! The exporter fails fast: destination problems surface before any
//! rendering happens, and a missing record is rejected at the controller
//! boundary before this module is reached.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, Mm, PdfDocument, Point, Polygon, Pt, Rgb,
};

use crate::error::ExportError;
use crate::record::{HeroRecord, PortraitImage};

/// Landscape letter, in points.
const PAGE_WIDTH: f32 = 792.0;
/// Landscape letter, in points.
const PAGE_HEIGHT: f32 = 612.0;

/// Backdrop fill, the UI's grey (#d9d9d9).
const BACKDROP_RGB: (f32, f32, f32) = (217.0 / 255.0, 217.0 / 255.0, 217.0 / 255.0);
/// Value text color, the UI's crimson (#9f0000).
const PRIMARY_RGB: (f32, f32, f32) = (159.0 / 255.0, 0.0, 0.0);

/// Portrait height as a fraction of the page height.
const PORTRAIT_HEIGHT_FRAC: f32 = 0.7;
/// Portrait left edge as a fraction of the page width.
const PORTRAIT_X_FRAC: f32 = 0.08;
/// Gap between portrait and text column, in points.
const TEXT_GAP: f32 = 50.0;

/// Resolve the default destination for a record and ensure the export
/// directory exists.
///
/// The file name is the hero name with spaces replaced by underscores.
///
/// # Errors
///
/// Returns [`ExportError::Io`] when the export directory cannot be created.
pub fn default_export_path(record: &HeroRecord, export_dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(export_dir)?;
    Ok(export_dir.join(format!("{}.pdf", record.file_stem())))
}

/// Render `record` (and its portrait, when present) to a PDF at `dest`.
///
/// # Errors
///
/// Returns [`ExportError`] when the destination is unwritable or the
/// renderer fails. A missing portrait is not an error; the image region is
/// omitted and the text column shifts left.
pub fn export_pdf(
    record: &HeroRecord,
    portrait: Option<&PortraitImage>,
    dest: &Path,
) -> Result<(), ExportError> {
    // Fail fast on an unwritable destination, before any layout work.
    let file = File::create(dest)?;

    let (doc, page, layer) = PdfDocument::new(
        &record.name,
        Mm::from(Pt(PAGE_WIDTH)),
        Mm::from(Pt(PAGE_HEIGHT)),
        "Page",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let label_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let value_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(e.to_string()))?;

    draw_backdrop(&layer);
    let portrait_width = portrait.map_or(0.0, |p| draw_portrait(&layer, p));
    draw_text_column(&layer, record, portrait_width, &label_font, &value_font);

    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Render(e.to_string()))?;

    tracing::info!(dest = %dest.display(), "exported hero record");
    Ok(())
}

/// Fill the whole page with the backdrop grey.
fn draw_backdrop(layer: &printpdf::PdfLayerReference) {
    let (r, g, b) = BACKDROP_RGB;
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));

    let corners = [
        (0.0, 0.0),
        (PAGE_WIDTH, 0.0),
        (PAGE_WIDTH, PAGE_HEIGHT),
        (0.0, PAGE_HEIGHT),
    ];
    let ring = corners
        .iter()
        .map(|&(x, y)| (Point::new(Mm::from(Pt(x)), Mm::from(Pt(y))), false))
        .collect();
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

/// Place the portrait at 8% from the left, vertically centered, scaled to
/// 70% of the page height preserving aspect ratio.
///
/// Returns the rendered width in points, so the text column can offset
/// relative to it.
fn draw_portrait(layer: &printpdf::PdfLayerReference, portrait: &PortraitImage) -> f32 {
    let height = PAGE_HEIGHT * PORTRAIT_HEIGHT_FRAC;
    let width = height * portrait.width() as f32 / portrait.height().max(1) as f32;
    let x = PAGE_WIDTH * PORTRAIT_X_FRAC;
    let y = (PAGE_HEIGHT - height) / 2.0;

    // At 72 dpi one pixel is one point, so the scale factors map pixel
    // dimensions straight to the target size.
    let scale_x = width / portrait.width() as f32;
    let scale_y = height / portrait.height() as f32;

    let image = Image::from_dynamic_image(portrait.image());
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm::from(Pt(x))),
            translate_y: Some(Mm::from(Pt(y))),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(72.0),
            ..ImageTransform::default()
        },
    );

    width
}

/// Draw the three text blocks right of the portrait region.
fn draw_text_column(
    layer: &printpdf::PdfLayerReference,
    record: &HeroRecord,
    portrait_width: f32,
    label_font: &printpdf::IndirectFontRef,
    value_font: &printpdf::IndirectFontRef,
) {
    let column_left = PAGE_WIDTH * PORTRAIT_X_FRAC + portrait_width + TEXT_GAP;
    let center_x = column_left + (PAGE_WIDTH - column_left) / 2.2;
    let mut y = PAGE_HEIGHT * 0.75;

    let black = Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None));
    let (pr, pg, pb) = PRIMARY_RGB;
    let primary = Color::Rgb(Rgb::new(pr, pg, pb, None));

    layer.set_fill_color(black.clone());
    draw_centered(layer, &record.name, 40.0, center_x, y, value_font);
    y -= 80.0;

    layer.set_fill_color(black.clone());
    draw_centered(layer, "PLACE OF BIRTH:", 18.0, center_x, y, label_font);
    y -= 30.0;
    layer.set_fill_color(primary.clone());
    draw_centered(layer, &record.place_of_birth, 18.0, center_x, y, value_font);
    y -= 60.0;

    layer.set_fill_color(black);
    draw_centered(layer, "BASE OF OPERATIONS:", 18.0, center_x, y, label_font);
    y -= 30.0;
    layer.set_fill_color(primary);
    draw_centered(layer, &record.base, 18.0, center_x, y, value_font);
}

/// Draw text centered on `center_x`.
///
/// Uses an average Helvetica advance of 0.5 em to estimate the string
/// width; exact metrics are not worth carrying for a fixed template.
fn draw_centered(
    layer: &printpdf::PdfLayerReference,
    text: &str,
    size: f32,
    center_x: f32,
    y: f32,
    font: &printpdf::IndirectFontRef,
) {
    let est_width = text.chars().count() as f32 * size * 0.5;
    let x = center_x - est_width / 2.0;
    layer.use_text(text, size, Mm::from(Pt(x)), Mm::from(Pt(y)), font);
}
