use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::domain::ChartImage;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_MM: f32 = 20.0;
const MM_PER_POINT: f32 = 25.4 / 72.0;
const POINTS_PER_INCH: f32 = 72.0;
const LINE_SPACING: f32 = 1.2;
const LAYER_NAME: &str = "Report";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextRole {
    Title,
    Subtitle,
    Heading,
    Body,
}

impl TextRole {
    const fn size(self) -> f32 {
        match self {
            TextRole::Title => 24.0,
            TextRole::Subtitle => 9.0,
            TextRole::Heading => 16.0,
            TextRole::Body => 11.0,
        }
    }

    const fn bold(self) -> bool {
        match self {
            TextRole::Title | TextRole::Heading => true,
            TextRole::Subtitle | TextRole::Body => false,
        }
    }
}

/// Top-down flow layout over A4 pages.
///
/// Content that does not fit below the cursor continues on a fresh page.
pub(super) struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Distance of the next line's top edge from the page bottom.
    cursor_mm: f32,
    pages: usize,
}

#[expect(
    clippy::float_arithmetic,
    reason = "Page layout works in millimetre offsets."
)]
impl PageWriter {
    pub(super) fn new(title: &str) -> Result<Self, String> {
        let (doc, page, layer) = PdfDocument::new(title, PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| format!("load Helvetica: {:?}", err))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| format!("load Helvetica-Bold: {:?}", err))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            cursor_mm: PAGE_HEIGHT.0 - MARGIN_MM,
            pages: 1,
        })
    }

    pub(super) fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_mm = PAGE_HEIGHT.0 - MARGIN_MM;
        self.pages = self.pages.saturating_add(1);
    }

    pub(super) fn text(&mut self, text: &str, role: TextRole) {
        let size = role.size();
        let line_height = size * LINE_SPACING * MM_PER_POINT;
        self.ensure_space(line_height);

        let baseline = self.cursor_mm - size * MM_PER_POINT;
        let font = if role.bold() { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(baseline), font);
        self.cursor_mm -= line_height;
    }

    pub(super) fn spacer(&mut self, points: f32) {
        self.cursor_mm -= points * MM_PER_POINT;
    }

    /// Places `chart` at the left margin, scaled to `width_pt` x `height_pt`.
    pub(super) fn image(
        &mut self,
        chart: &ChartImage,
        decoded: &image::DynamicImage,
        width_pt: f32,
        height_pt: f32,
    ) {
        let height_mm = height_pt * MM_PER_POINT;
        self.ensure_space(height_mm);

        let pixel_width = chart.width().max(1) as f32;
        let pixel_height = chart.height().max(1) as f32;
        let dpi = pixel_width * POINTS_PER_INCH / width_pt;
        let natural_height_pt = pixel_height * POINTS_PER_INCH / dpi;

        let bottom = self.cursor_mm - height_mm;
        Image::from_dynamic_image(decoded).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(bottom)),
                scale_x: Some(1.0),
                scale_y: Some(height_pt / natural_height_pt),
                dpi: Some(dpi),
                ..ImageTransform::default()
            },
        );
        self.cursor_mm = bottom;
    }

    pub(super) const fn pages(&self) -> usize {
        self.pages
    }

    pub(super) fn finish(self) -> Result<Vec<u8>, String> {
        self.doc
            .save_to_bytes()
            .map_err(|err| format!("serialize PDF: {:?}", err))
    }

    fn ensure_space(&mut self, height_mm: f32) {
        let fresh_page = (self.cursor_mm - (PAGE_HEIGHT.0 - MARGIN_MM)).abs() < f32::EPSILON;
        if self.cursor_mm - height_mm < MARGIN_MM && !fresh_page {
            self.new_page();
        }
    }
}
