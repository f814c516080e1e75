use itertools::Itertools;

use crate::detail::BusinessDetail;
use crate::presentation::{format_distance, BusinessRow, StyledText};

const HIGHLIGHT: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn render_styled(text: &StyledText, color: bool) -> String {
    if color {
        format!("{HIGHLIGHT}{}{RESET}{}", text.highlighted(), text.unstyled())
    } else {
        text.text.clone()
    }
}

/// one list row, e.g. "[pizza]   Joe's Pizza  $$$$ • 0.25 miles"
pub fn render_row(row: &BusinessRow, color: bool) -> String {
    format!(
        "{:<10}{}  {}",
        format!("[{}]", row.icon),
        row.name,
        render_styled(&row.info_label, color)
    )
}

pub fn render_detail(detail: &BusinessDetail) -> String {
    let business = detail.business;
    let mut lines = vec![
        business.name.clone(),
        business.categories.iter().map(|c| c.title.as_str()).join(", "),
    ];
    if let Some(price) = &business.price {
        lines.push(format!("price: {price}"));
    }
    lines.push(format!(
        "distance: {}",
        format_distance(business.distance_meters)
    ));
    if let Some(phone_url) = detail.phone_url() {
        lines.push(format!("call: {phone_url}"));
    }
    if let Some(share_url) = detail.share_url() {
        lines.push(format!("share: {share_url}"));
    }
    if let Some(image_url) = detail.image_url() {
        lines.push(format!("image: {image_url}"));
    }
    if let Some(request) = detail.directions_request() {
        lines.push(format!(
            "directions: ({}, {}) -> ({}, {}) by {:?}",
            request.source.latitude,
            request.source.longitude,
            request.destination.latitude,
            request.destination.longitude,
            request.transport_type
        ));
    }
    if let Some(meters) = detail.straight_line_meters() {
        lines.push(format!("straight line: {}", format_distance(meters)));
    }
    lines.join("\n")
}
