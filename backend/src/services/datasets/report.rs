use actix_web::{HttpResponse, Responder};
use chrono::Local;
use genpdf::elements::{Break, Paragraph};
use genpdf::style::{Style, StyledString};
use genpdf::Document;
use std::error::Error;

use common::model::summary::Summary;

use crate::storage;

/// Streams the generated report inline as `application/pdf`.
pub async fn process() -> impl Responder {
    match generate_report() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .body(bytes),
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("PDF generation failed: {}", e)),
    }
}

/// Load the font family (adjust path/name if needed).
fn load_font() -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>, Box<dyn Error>> {
    // Try Arial first if the family TTFs were added to ./fonts, otherwise
    // fall back to LiberationSans in the same directory.
    if let Ok(family) = genpdf::fonts::from_files("./fonts", "Arial", None) {
        return Ok(family);
    }
    genpdf::fonts::from_files("./fonts", "LiberationSans", None).map_err(Into::into)
}

fn configure_document() -> Result<Document, Box<dyn Error>> {
    let font_family = load_font()?;
    let mut doc = Document::new(font_family);
    doc.set_title("Chemical Equipment Parameter Report");
    doc.set_font_size(10);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    doc.set_page_decorator(decorator);
    Ok(doc)
}

/// One block per retained summary: filename heading plus the stored stats.
fn push_summary(doc: &mut Document, index: usize, summary: &Summary) {
    let mut heading = Paragraph::new("");
    heading.push(StyledString::new(
        format!("Dataset {}: {}", index + 1, summary.filename),
        Style::new().bold().with_font_size(12),
    ));
    doc.push(heading);

    doc.push(Paragraph::new(format!("Upload Date: {}", summary.upload_date)));
    doc.push(Paragraph::new(format!("Total Records: {}", summary.total_count)));
    doc.push(Paragraph::new(format!("Avg Flow Rate: {:.2}", summary.avg_flowrate)));
    doc.push(Paragraph::new(format!("Avg Pressure: {:.2}", summary.avg_pressure)));
    doc.push(Paragraph::new(format!("Avg Temperature: {:.2}", summary.avg_temperature)));

    if let Some(distribution) = &summary.equipment_distribution {
        let line = distribution
            .iter()
            .map(|(label, count)| format!("{}: {}", label, count))
            .collect::<Vec<_>>()
            .join(", ");
        doc.push(Paragraph::new(format!("Distribution: {}", line)));
    }
    doc.push(Break::new(1));
}

/// Renders the report over the retained summaries into PDF bytes.
fn generate_report() -> Result<Vec<u8>, Box<dyn Error>> {
    let conn = storage::open()?;
    let summaries = storage::recent_summaries(&conn)?;

    let mut doc = configure_document()?;

    let mut title = Paragraph::new("");
    title.push(StyledString::new(
        "Chemical Equipment Parameter Report",
        Style::new().bold().with_font_size(16),
    ));
    doc.push(title);
    doc.push(Paragraph::new(format!(
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )));
    doc.push(Break::new(1));

    if summaries.is_empty() {
        doc.push(Paragraph::new("No data available."));
    }
    for (i, summary) in summaries.iter().enumerate() {
        push_summary(&mut doc, i, summary);
    }

    let mut bytes = Vec::new();
    doc.render(&mut bytes)?;
    Ok(bytes)
}
