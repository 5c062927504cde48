//! Minimal PDF document manager over `pdf_writer`.
//!
//! Pages are buffered as open content streams and only finalized in
//! [`PdfManager::save`], because the per-page footer carries the total page
//! count (`Page i of n`), which is unknown until the whole document has been
//! laid out.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

struct PageBuf {
    page_id: Ref,
    content_id: Ref,
    content: Content,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    bold_font_id: Ref,
    next_id: i32,

    pages: Vec<PageBuf>,
    cursor_y: f32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            bold_font_id,
            next_id,

            pages: Vec::new(),
            cursor_y: 0.0,

            // A4 portrait in points
            page_w: 595.0,
            page_h: 842.0,
            margin: 40.0,
            row_h: 20.0,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 18.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, self.font_id);
        fonts.pair(FONT_BOLD, self.bold_font_id);

        self.pages.push(PageBuf {
            page_id,
            content_id,
            content: Content::new(),
        });
        self.cursor_y = self.page_h - self.margin;
    }

    fn current(&mut self) -> &mut Content {
        if self.pages.is_empty() {
            self.new_page();
        }
        let idx = self.pages.len() - 1;
        &mut self.pages[idx].content
    }

    /// Breaks to a fresh page when less than `needed` vertical space is left.
    fn ensure_room(&mut self, needed: f32) {
        if self.pages.is_empty() || self.cursor_y - needed < self.margin {
            self.new_page();
        }
    }

    /// Rough Helvetica width estimate, good enough for centering and
    /// right-alignment of short table cells.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn draw_text(content: &mut Content, x: f32, y: f32, font: Name<'static>, size: f32, text: &str) {
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Centered bold document title.
    pub fn draw_title(&mut self, title: &str) {
        self.ensure_room(30.0);
        let size = self.title_font_size;
        let x = (self.page_w - Self::text_width(title, size)) / 2.0;
        let y = self.cursor_y;
        Self::draw_text(self.current(), x, y, FONT_BOLD, size, title);
        self.cursor_y -= 22.0;
    }

    /// Centered subtitle under the title (the "AS AT ..." line).
    pub fn draw_subtitle(&mut self, text: &str) {
        self.ensure_room(16.0);
        let x = (self.page_w - Self::text_width(text, 10.0)) / 2.0;
        let y = self.cursor_y;
        Self::draw_text(self.current(), x, y, FONT_REGULAR, 10.0, text);
        self.cursor_y -= 30.0;
    }

    /// Left-aligned bold section heading.
    pub fn section_heading(&mut self, text: &str) {
        // keep the heading attached to at least the table header + one row
        self.ensure_room(16.0 + 2.0 * self.row_h);
        let x = self.margin;
        let y = self.cursor_y;
        Self::draw_text(self.current(), x, y, FONT_BOLD, 12.0, text);
        self.cursor_y -= 16.0;
    }

    /// Fits header/content widths to the printable width, scaling down when
    /// the natural widths overflow.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (cell.len() as f32 * 6.2).max(*w);
                }
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_row(
        &mut self,
        col_widths: &[f32],
        row: &[String],
        font: Name<'static>,
        font_size: f32,
        right_align_last: bool,
    ) {
        let y = self.cursor_y - self.row_h;
        let mut x = self.margin;
        let last = col_widths.len().saturating_sub(1);
        let row_h = self.row_h;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            let tx = if right_align_last && i == last {
                x + w - 4.0 - Self::text_width(text, font_size)
            } else {
                x + 4.0
            };
            let content = self.current();
            Self::draw_text(content, tx, y + 6.0, font, font_size, text);
            Self::draw_cell_borders(content, x, y, *w, row_h);
            x += w;
        }

        self.cursor_y = y;
    }

    fn draw_header_row(&mut self, col_widths: &[f32], headers: &[&str]) {
        let table_w: f32 = col_widths.iter().sum();
        let y = self.cursor_y - self.row_h;
        let (margin, row_h) = (self.margin, self.row_h);
        // #374151 band with white labels
        Self::fill_band(self.current(), margin, y, table_w, row_h, (0.22, 0.25, 0.32));
        self.current().save_state();
        self.current().set_fill_rgb(1.0, 1.0, 1.0);
        let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        self.draw_row(col_widths, &header_row, FONT_BOLD, self.header_font_size, true);
        self.current().restore_state();
    }

    /// One collection table: dark header band, bordered zebra rows, a
    /// highlighted bold totals row. Paginates with a repeated header; the
    /// last column is right-aligned.
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>], total_row: &[String]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();

        self.ensure_room(2.0 * self.row_h);
        self.draw_header_row(&col_widths, headers);

        for (i, row) in rows.iter().enumerate() {
            if self.cursor_y - self.row_h < self.margin {
                self.new_page();
                self.draw_header_row(&col_widths, headers);
            }
            if i % 2 == 1 {
                let y = self.cursor_y - self.row_h;
                let (margin, row_h) = (self.margin, self.row_h);
                Self::fill_band(self.current(), margin, y, table_w, row_h, (0.96, 0.96, 0.96));
            }
            self.draw_row(&col_widths, row, FONT_REGULAR, self.font_size, true);
        }

        // Totals row: #e0e7ff fill, #3730a3 bold text, label left and
        // amount right with no internal borders.
        if self.cursor_y - self.row_h < self.margin {
            self.new_page();
            self.draw_header_row(&col_widths, headers);
        }
        let y = self.cursor_y - self.row_h;
        let (margin, row_h, header_size) = (self.margin, self.row_h, self.header_font_size);
        Self::fill_band(self.current(), margin, y, table_w, row_h, (0.88, 0.91, 1.0));

        let label = total_row.first().map(String::as_str).unwrap_or("");
        let amount = total_row.last().map(String::as_str).unwrap_or("");
        let amount_x = margin + table_w - 4.0 - Self::text_width(amount, header_size);

        let content = self.current();
        content.save_state();
        content.set_fill_rgb(0.22, 0.19, 0.64);
        Self::draw_text(content, margin + 4.0, y + 6.0, FONT_BOLD, header_size, label);
        Self::draw_text(content, amount_x, y + 6.0, FONT_BOLD, header_size, amount);
        content.restore_state();
        Self::draw_cell_borders(content, margin, y, table_w, row_h);

        self.cursor_y = y - 24.0;
    }

    /// The plain two-column balances table. Rows listed in `emphasized` get
    /// a grey band and bold text; `alarm_row` is drawn in red.
    pub fn write_balances(
        &mut self,
        rows: &[(String, String)],
        emphasized: &[usize],
        alarm_row: Option<usize>,
    ) {
        let table_w = self.page_w - 2.0 * self.margin;
        let value_right = self.margin + table_w - 4.0;

        for (i, (label, value)) in rows.iter().enumerate() {
            self.ensure_room(self.row_h);
            let y = self.cursor_y - self.row_h;
            let (margin, row_h, size) = (self.margin, self.row_h, self.font_size);
            let strong = emphasized.contains(&i);
            let font = if strong { FONT_BOLD } else { FONT_REGULAR };

            if strong {
                // #f3f4f6
                Self::fill_band(self.current(), margin, y, table_w, row_h, (0.95, 0.96, 0.96));
            }

            let value_x = value_right - Self::text_width(value, size);
            let content = self.current();
            content.save_state();
            if alarm_row == Some(i) {
                // #dc2626
                content.set_fill_rgb(0.86, 0.15, 0.15);
            }
            Self::draw_text(content, margin + 4.0, y + 6.0, FONT_BOLD, size, label);
            Self::draw_text(content, value_x, y + 6.0, font, size, value);
            content.restore_state();

            self.cursor_y = y;
        }
        self.cursor_y -= 24.0;
    }

    /// Finalizes every buffered page (footer with the now-known page count),
    /// builds the page tree and writes the file.
    pub fn save(mut self, path: &Path, footer_center: &str) -> std::io::Result<()> {
        let total = self.pages.len();
        let footer_y = 20.0;

        for (i, page) in self.pages.iter_mut().enumerate() {
            let pg = format!("Page {} of {}", i + 1, total);
            let pg_x = self.page_w - self.margin - Self::text_width(&pg, 8.0);
            Self::draw_text(&mut page.content, pg_x, footer_y, FONT_REGULAR, 8.0, &pg);

            let center_x = (self.page_w - Self::text_width(footer_center, 8.0)) / 2.0;
            Self::draw_text(
                &mut page.content,
                center_x,
                footer_y,
                FONT_REGULAR,
                8.0,
                footer_center,
            );
        }

        let mut page_refs = Vec::with_capacity(total);
        for page in self.pages.drain(..) {
            self.pdf.stream(page.content_id, &page.content.finish());
            page_refs.push(page.page_id);
        }

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(page_refs.len() as i32);
        pages.kids(page_refs);
        drop(pages);

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
