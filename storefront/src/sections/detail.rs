//! Package detail sections: gallery, trip facts, departure picker,
//! booking action.

use chrono::NaiveDate;
use roam_data::SiteConfig;
use roam_travel::booking::{build_booking_message, whatsapp_link, DeparturePicker};
use roam_travel::catalog::{Agency, TravelPackage};
use roam_travel::gallery::Carousel;

use crate::sections::escape_html;

/// The full detail layout for one package.
pub fn render_detail(
    pkg: &TravelPackage,
    agency: Option<&Agency>,
    config: &SiteConfig,
    today: NaiveDate,
) -> String {
    let picker = DeparturePicker::new(&pkg.availability, today);

    format!(
        r#"<article class="detail-layout">
<div>
{gallery}
{about}
</div>
<aside class="detail-panel">
{facts}
{departures}
{booking}
</aside>
</article>"#,
        gallery = render_gallery(pkg),
        about = render_about(pkg),
        facts = render_facts(pkg, agency),
        departures = render_departures(pkg, &picker, config),
        booking = render_booking_action(pkg, &picker, config),
    )
}

/// Gallery markup. With one or zero images there is no rotation and no
/// controls; the page script only arms a timer when it finds more than
/// one slide.
fn render_gallery(pkg: &TravelPackage) -> String {
    if pkg.images.is_empty() {
        return r#"<div class="gallery"><div class="no-photo"></div></div>"#.to_string();
    }

    let carousel = Carousel::new(pkg.images.len(), 0);

    let slides: Vec<String> = pkg
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let active = if i == carousel.index() { " active" } else { "" };
            format!(
                r#"<div class="slide{}"><img src="{}" alt="{}"></div>"#,
                active,
                escape_html(&image.url),
                escape_html(image.alt_text.as_deref().unwrap_or(&pkg.title)),
            )
        })
        .collect();

    let controls = if carousel.shows_controls() {
        let dots: Vec<String> = (0..pkg.images.len())
            .map(|i| {
                let active = if i == carousel.index() { " active" } else { "" };
                format!(r#"<button class="dot{}" type="button" aria-label="Photo {}"></button>"#, active, i + 1)
            })
            .collect();
        format!(
            r#"<button class="gallery-prev" type="button" aria-label="Previous photo">&lsaquo;</button>
<button class="gallery-next" type="button" aria-label="Next photo">&rsaquo;</button>
<div class="gallery-dots">{}</div>"#,
            dots.join("")
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="gallery" data-gallery>
{}
{}
</div>"#,
        slides.join("\n"),
        controls
    )
}

fn render_about(pkg: &TravelPackage) -> String {
    let description = pkg
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", escape_html(d)))
        .unwrap_or_default();
    let itinerary = pkg
        .itinerary
        .as_deref()
        .map(|i| {
            format!(
                r#"<h3>Itinerary</h3><div class="itinerary">{}</div>"#,
                escape_html(i)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<section class="detail-panel" style="margin-top:1.5rem">
<h1>{}</h1>
{}{}
</section>"#,
        escape_html(&pkg.title),
        description,
        itinerary
    )
}

fn render_facts(pkg: &TravelPackage, agency: Option<&Agency>) -> String {
    let agency_line = match agency {
        Some(agency) => format!(
            r#"<div class="trip-meta">Operated by {} &middot; &#9733; {}</div>"#,
            escape_html(&agency.name),
            agency.rating_display()
        ),
        None => String::new(),
    };
    let advance = match &pkg.advance {
        Some(advance) => format!(
            r#"<div class="trip-meta">Reserve with {} advance</div>"#,
            advance.display()
        ),
        None => String::new(),
    };
    let tags = if pkg.tags.is_empty() {
        String::new()
    } else {
        let chips: Vec<String> = pkg
            .tags
            .iter()
            .map(|t| format!(r#"<span class="badge">{}</span>"#, escape_html(t)))
            .collect();
        format!(r#"<div>{}</div>"#, chips.join(" "))
    };

    format!(
        r#"<div class="trip-price">{price} <span class="trip-meta">per person</span></div>
<div class="trip-meta">{days} days &middot; up to {group} people</div>
{agency_line}{advance}{tags}"#,
        price = pkg.price.display(),
        days = pkg.duration_days,
        group = pkg.group_size,
        agency_line = agency_line,
        advance = advance,
        tags = tags,
    )
}

/// Selectable departures. The first open date arrives pre-selected;
/// each radio carries its booking deep-link so selecting a date swaps
/// the CTA target client-side.
fn render_departures(
    pkg: &TravelPackage,
    picker: &DeparturePicker,
    config: &SiteConfig,
) -> String {
    if picker.available_dates().is_empty() {
        return String::new();
    }

    let items: Vec<String> = picker
        .available_dates()
        .iter()
        .map(|date| {
            let checked = if Some(*date) == picker.selected() {
                " checked"
            } else {
                ""
            };
            let link = whatsapp_link(
                &config.booking_phone,
                &build_booking_message(pkg, *date),
            );
            format!(
                r#"<li><label><input type="radio" name="departure" value="{value}" data-link="{link}"{checked}> {label}</label></li>"#,
                value = date,
                link = escape_html(&link),
                checked = checked,
                label = date.format("%d %b %Y"),
            )
        })
        .collect();

    format!(
        r#"<h3>Departures</h3>
<ul class="departures">
{}
</ul>"#,
        items.join("\n")
    )
}

/// The booking CTA: a deep-link when a departure is selected, a
/// disabled control labelled with the reason otherwise.
fn render_booking_action(
    pkg: &TravelPackage,
    picker: &DeparturePicker,
    config: &SiteConfig,
) -> String {
    if let Some(block) = picker.blocker() {
        return format!(
            r#"<span class="btn" aria-disabled="true">{}</span>"#,
            block.label()
        );
    }

    // Safe: blocker() returned None, so a date is selected.
    let Some(selected) = picker.selected() else {
        return String::new();
    };
    let link = whatsapp_link(
        &config.booking_phone,
        &build_booking_message(pkg, selected),
    );
    format!(
        r#"<a id="book-link" class="btn" href="{}" target="_blank" rel="noopener">Book on WhatsApp</a>"#,
        escape_html(&link)
    )
}
