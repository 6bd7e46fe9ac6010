//! Paged plain-text renderer.

use std::io::Write;

use tracing::debug;

use super::error::RenderError;
use super::format::{format_amount, format_rate};
use super::printable::Printable;
use super::DocumentRenderer;
use crate::document::DocumentDraft;
use crate::settings::CompanySettings;
use crate::summary::DocumentSummary;
use crate::withholding::{CertificateTotals, PaymentCondition, WhtCertificate, baht_text};

const FORM_FEED: char = '\u{c}';

/// Page geometry in text lines and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Lines per page.
    pub page_lines: usize,
    /// Blank lines kept free at the bottom of every page.
    pub bottom_margin: usize,
    /// Characters per line.
    pub width: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_lines: 60,
            bottom_margin: 3,
            width: 80,
        }
    }
}

impl PageLayout {
    fn usable_lines(self) -> usize {
        self.page_lines.saturating_sub(self.bottom_margin)
    }
}

/// Writes documents as plain text, one page per form feed.
///
/// Tracks a line cursor. Before each block is written the renderer checks
/// whether it fits above the bottom margin; if not it starts a new page and
/// repeats the running header.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    layout: PageLayout,
    line: usize,
    pages: usize,
    running_header: Vec<String>,
}

impl<W: Write> TextRenderer<W> {
    /// Renderer with the default page layout.
    pub fn new(out: W) -> Self {
        Self::with_layout(out, PageLayout::default())
    }

    /// Renderer with a custom page layout.
    pub fn with_layout(out: W, layout: PageLayout) -> Self {
        Self {
            out,
            layout,
            line: 0,
            pages: 0,
            running_header: Vec::new(),
        }
    }

    /// Pages written so far.
    #[must_use]
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn start_printable(&mut self, running_header: Vec<String>) -> Result<(), RenderError> {
        let needed = running_header.len() + 1;
        if needed > self.layout.usable_lines() {
            return Err(RenderError::PageTooShort {
                page_lines: self.layout.usable_lines(),
                needed,
            });
        }
        if self.pages > 0 {
            write!(self.out, "{FORM_FEED}")?;
        }
        self.pages += 1;
        self.line = 0;
        self.running_header = running_header;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{text}")?;
        self.line += 1;
        Ok(())
    }

    fn rule(&self) -> String {
        "-".repeat(self.layout.width)
    }

    /// Starts a new page when `lines` more would cross the bottom margin.
    fn ensure_room(&mut self, lines: usize) -> Result<(), RenderError> {
        if self.line + lines <= self.layout.usable_lines() || self.line <= self.running_header.len() {
            return Ok(());
        }

        write!(self.out, "{FORM_FEED}")?;
        self.pages += 1;
        self.line = 0;
        debug!(page = self.pages, "Starting new page");

        let header = std::mem::take(&mut self.running_header);
        for text in &header {
            self.write_line(text)?;
        }
        self.running_header = header;
        Ok(())
    }

    /// Writes lines that belong together on one page.
    ///
    /// A block taller than a page under the running header is written line
    /// by line instead, breaking wherever the margin is reached.
    fn block(&mut self, lines: &[String]) -> Result<(), RenderError> {
        if self.running_header.len() + lines.len() <= self.layout.usable_lines() {
            self.ensure_room(lines.len())?;
            for text in lines {
                self.write_line(text)?;
            }
        } else {
            for text in lines {
                self.ensure_room(1)?;
                self.write_line(text)?;
            }
        }
        Ok(())
    }

    fn two_columns(&self, left: &str, right: &str) -> String {
        let gap = self
            .layout
            .width
            .saturating_sub(left.chars().count() + right.chars().count())
            .max(1);
        format!("{left}{}{right}", " ".repeat(gap))
    }

    fn render_document(
        &mut self,
        draft: &DocumentDraft,
        summary: &DocumentSummary,
        company: &CompanySettings,
    ) -> Result<(), RenderError> {
        let title_line = self.two_columns(draft.kind.title(), &format!("No. {}", draft.number));
        let columns = self.item_row("Description", "Qty", "Unit price", "Amount");
        self.start_printable(vec![company.company_name.clone(), title_line.clone(), columns.clone()])?;

        let mut letterhead = vec![company.company_name.clone()];
        if let Some(tax_id) = &company.tax_id {
            letterhead.push(format!("Tax ID {tax_id}"));
        }
        if let Some(address) = &company.address {
            letterhead.push(address.clone());
        }
        if let Some(phone) = &company.phone {
            letterhead.push(format!("Tel. {phone}"));
        }
        letterhead.push(self.rule());
        self.block(&letterhead)?;

        let mut heading = vec![
            title_line,
            self.two_columns("", &format!("Date {}", draft.issued_on)),
        ];
        if let Some(due_on) = draft.due_on {
            heading.push(self.two_columns("", &format!("Due {due_on}")));
        }
        if let Some(party) = &draft.party {
            heading.push(format!("{}: {}", draft.kind.party_role().as_str(), party.name));
            if let Some(tax_id) = &party.tax_id {
                heading.push(format!("Tax ID {tax_id}"));
            }
            if let Some(address) = &party.address {
                heading.push(address.clone());
            }
        }
        if let Some(reference) = &draft.reference {
            heading.push(format!("Ref. {reference}"));
        }
        heading.push(self.rule());
        heading.push(columns);
        self.block(&heading)?;

        for item in &draft.items {
            let qty = item.quantity().map(|q| q.normalize().to_string()).unwrap_or_default();
            let price = item.unit_price().map(format_amount).unwrap_or_default();
            let row = self.item_row(item.description(), &qty, &price, &format_amount(item.line_total()));
            self.block(&[row])?;
        }

        let mut totals = vec![
            self.rule(),
            self.two_columns("Subtotal", &format_amount(summary.subtotal)),
        ];
        if !summary.discount_rate.is_zero() {
            totals.push(self.two_columns(
                &format!("Discount {}", format_rate(summary.discount_rate)),
                &format_amount(summary.discount_amount),
            ));
            totals.push(self.two_columns("After discount", &format_amount(summary.after_discount)));
        }
        totals.push(self.two_columns(
            &format!("VAT {}", format_rate(summary.vat_rate)),
            &format_amount(summary.vat_amount),
        ));
        totals.push(self.two_columns("Grand total", &format_amount(summary.grand_total)));
        let payable = if summary.has_withholding() {
            totals.push(self.two_columns(
                "Withholding tax",
                &format_amount(summary.withholding_amount),
            ));
            totals.push(self.two_columns("Net total", &format_amount(summary.net_total)));
            summary.net_total
        } else {
            summary.grand_total
        };
        totals.push(format!("({})", baht_text(payable)));
        if let Some(notes) = &draft.notes {
            totals.push(format!("Notes: {notes}"));
        }
        self.block(&totals)
    }

    fn item_row(&self, description: &str, qty: &str, price: &str, amount: &str) -> String {
        let numbers = 8 + 14 + 14;
        let desc_width = self.layout.width.saturating_sub(numbers).max(1);
        let description: String = description.chars().take(desc_width).collect();
        format!("{description:<desc_width$}{qty:>8}{price:>14}{amount:>14}")
    }

    fn render_certificate(
        &mut self,
        certificate: &WhtCertificate,
        totals: &CertificateTotals,
    ) -> Result<(), RenderError> {
        let number = match &certificate.book_number {
            Some(book) => format!("Book {book} No. {}", certificate.number),
            None => format!("No. {}", certificate.number),
        };
        let title_line = self.two_columns("หนังสือรับรองการหักภาษี ณ ที่จ่าย", &number);
        let columns = self.item_row("Income type", "Rate", "Amount paid", "Tax withheld");
        self.start_printable(vec![title_line.clone(), columns.clone()])?;

        let mut heading = vec![
            title_line,
            self.two_columns("", &format!("Date {}", certificate.issued_on)),
            self.rule(),
        ];
        for (role, party) in [("Payer", &certificate.payer), ("Payee", &certificate.payee)] {
            heading.push(format!("{role}: {}", party.name));
            heading.push(format!(
                "Tax ID {}",
                party.tax_id.as_deref().unwrap_or_default()
            ));
            if let Some(address) = &party.address {
                heading.push(address.clone());
            }
        }
        heading.push(format!("Form: {}", certificate.form.label()));
        heading.push(self.rule());
        heading.push(columns);
        self.block(&heading)?;

        for line in &certificate.lines {
            let label = format!("{} {}", line.income_type.code(), line.income_type.label());
            let row = self.item_row(
                &label,
                &format_rate(line.effective_rate()),
                &format_amount(line.amount),
                &format_amount(line.tax_amount()),
            );
            let mut rows = vec![row];
            rows.push(format!("    {}  {}", line.paid_on, line.description).trim_end().to_string());
            self.block(&rows)?;
        }

        let mut footer = vec![
            self.rule(),
            self.item_row(
                "Total",
                "",
                &format_amount(totals.total_amount),
                &format_amount(totals.total_tax),
            ),
            self.two_columns("Net payable", &format_amount(totals.net_payable)),
            format!("({})", baht_text(totals.total_tax)),
        ];
        let condition = match (&certificate.condition_note, certificate.condition) {
            (Some(note), PaymentCondition::Other) => {
                format!("Payer: {} ({note})", certificate.condition.label())
            }
            (_, condition) => format!("Payer: {}", condition.label()),
        };
        footer.push(condition);
        self.block(&footer)
    }
}

impl<W: Write> DocumentRenderer for TextRenderer<W> {
    fn render(&mut self, printable: &Printable<'_>) -> Result<(), RenderError> {
        match *printable {
            Printable::Document {
                draft,
                summary,
                company,
            } => self.render_document(draft, summary, company)?,
            Printable::Certificate {
                certificate,
                totals,
            } => self.render_certificate(certificate, totals)?,
        }
        self.out.flush()?;
        debug!(number = printable.number(), pages = self.pages, "Rendered");
        Ok(())
    }
}
