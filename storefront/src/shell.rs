//! Page shell: document frame, site styles, page scripts.

use roam_data::SiteConfig;
use roam_travel::gallery::{AUTOPLAY_INTERVAL_MS, RESUME_DELAY_MS};

use crate::sections::escape_html;

/// Wrap rendered sections in the full document.
pub fn render_page(title: &str, config: &SiteConfig, body: &str) -> String {
    let banner = if config.show_banner {
        match &config.banner_text {
            Some(text) => format!(r#"<div class="banner">{}</div>"#, escape_html(text)),
            None => String::new(),
        }
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
{banner}<header class="site-header">
    <a href="/" class="logo">Roam</a>
    <nav class="header-nav">
        <a href="/packages">Trips</a>
        <a href="/admin">Admin</a>
    </nav>
</header>
<main>
{body}
</main>
<footer class="site-footer">Roam Trips &middot; group adventures, simply booked</footer>
{scripts}
</body>
</html>"#,
        title = escape_html(title),
        styles = SITE_STYLES,
        banner = banner,
        body = body,
        scripts = page_scripts(),
    )
}

/// Static error state with a manual retry; the link re-issues the same
/// fetch from scratch.
pub fn render_fetch_error(message: &str, retry_href: &str) -> String {
    format!(
        r#"<section class="fetch-error">
    <h2>Couldn't load trips</h2>
    <p>{}</p>
    <a class="btn" href="{}">Try again</a>
</section>"#,
        escape_html(message),
        escape_html(retry_href),
    )
}

/// Client-side gallery driver. Mirrors the `roam_travel::gallery`
/// state machine: one pending timer, cleared before re-arming, manual
/// navigation suspends autoplay for the cooldown, teardown on unload.
fn page_scripts() -> String {
    format!(
        r#"<script>
(function() {{
    var INTERVAL = {interval};
    var COOLDOWN = {cooldown};
    var galleries = [];

    function arm(g, delay, fn) {{
        if (g.timer) clearTimeout(g.timer);
        g.timer = setTimeout(fn, delay);
    }}

    function show(g, index, direction) {{
        g.index = (index + g.slides.length) % g.slides.length;
        g.slides.forEach(function(slide, i) {{
            slide.classList.toggle('active', i === g.index);
            slide.classList.toggle('from-left', direction === 'back');
        }});
        g.dots.forEach(function(dot, i) {{
            dot.classList.toggle('active', i === g.index);
        }});
    }}

    function autoplay(g) {{
        arm(g, INTERVAL, function() {{
            show(g, g.index + 1, 'fwd');
            autoplay(g);
        }});
    }}

    function manual(g, index, direction) {{
        show(g, index, direction);
        arm(g, COOLDOWN, function() {{ autoplay(g); }});
    }}

    document.querySelectorAll('[data-gallery]').forEach(function(root) {{
        var g = {{
            index: 0,
            timer: null,
            slides: Array.prototype.slice.call(root.querySelectorAll('.slide')),
            dots: Array.prototype.slice.call(root.querySelectorAll('.dot')),
        }};
        if (g.slides.length <= 1) return;
        galleries.push(g);

        var prev = root.querySelector('.gallery-prev');
        var next = root.querySelector('.gallery-next');
        if (prev) prev.addEventListener('click', function() {{ manual(g, g.index - 1, 'back'); }});
        if (next) next.addEventListener('click', function() {{ manual(g, g.index + 1, 'fwd'); }});
        g.dots.forEach(function(dot, i) {{
            dot.addEventListener('click', function() {{ manual(g, i, i > g.index ? 'fwd' : 'back'); }});
        }});
        autoplay(g);
    }});

    window.addEventListener('pagehide', function() {{
        galleries.forEach(function(g) {{ if (g.timer) clearTimeout(g.timer); }});
    }});

    document.querySelectorAll('input[name="departure"]').forEach(function(radio) {{
        radio.addEventListener('change', function() {{
            var book = document.getElementById('book-link');
            if (book && radio.dataset.link) {{
                book.setAttribute('href', radio.dataset.link);
            }}
        }});
    }});
}})();
</script>"#,
        interval = AUTOPLAY_INTERVAL_MS,
        cooldown = RESUME_DELAY_MS,
    )
}

const SITE_STYLES: &str = r#"
:root {
    --primary: #0e7490;
    --primary-hover: #155e75;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --accent: #f59e0b;
    --error: #ef4444;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}
.banner { background: var(--accent); color: #fff; text-align: center; padding: .4rem; }
.site-header {
    display: flex; align-items: center; justify-content: space-between;
    padding: 1rem 2rem; background: var(--card-bg); border-bottom: 1px solid var(--border);
}
.logo { font-size: 1.4rem; font-weight: 700; color: var(--primary); text-decoration: none; }
.header-nav a { margin-left: 1.5rem; color: var(--text); text-decoration: none; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.site-footer { text-align: center; color: var(--text-muted); padding: 2rem; }
.btn {
    display: inline-block; background: var(--primary); color: #fff; border: none;
    padding: .6rem 1.2rem; border-radius: 6px; text-decoration: none; cursor: pointer;
}
.btn:hover { background: var(--primary-hover); }
.btn[aria-disabled="true"] { background: var(--border); color: var(--text-muted); cursor: not-allowed; }
.filter-bar { display: flex; flex-wrap: wrap; gap: .75rem; align-items: end;
    background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px;
    padding: 1rem; margin-bottom: 1.25rem; }
.filter-bar label { display: block; font-size: .8rem; color: var(--text-muted); }
.filter-bar input, .filter-bar select { padding: .4rem; border: 1px solid var(--border); border-radius: 4px; }
.tag-choices { display: flex; flex-wrap: wrap; gap: .5rem; }
.tag-choices label { font-size: .85rem; color: var(--text); }
.results-header { display: flex; justify-content: space-between; margin-bottom: .75rem; color: var(--text-muted); }
.trip-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.25rem; }
.trip-card { background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px; overflow: hidden; }
.trip-card img { width: 100%; height: 170px; object-fit: cover; display: block; }
.trip-card .no-photo { width: 100%; height: 170px; background: var(--border); }
.trip-card .card-body { padding: .9rem; }
.trip-card h3 { font-size: 1.05rem; margin-bottom: .25rem; }
.trip-card h3 a { color: var(--text); text-decoration: none; }
.trip-meta { font-size: .85rem; color: var(--text-muted); }
.trip-price { font-weight: 700; margin-top: .4rem; }
.badge { display: inline-block; font-size: .75rem; padding: .1rem .5rem; border-radius: 999px; background: var(--border); }
.badge.coming-soon { background: #dbeafe; color: #1d4ed8; }
.badge.sold-out { background: #fee2e2; color: #b91c1c; }
.empty-state { text-align: center; padding: 3rem 1rem; color: var(--text-muted); }
.pagination { display: flex; gap: .4rem; justify-content: center; margin: 1.5rem 0; }
.pagination a, .pagination span { padding: .35rem .7rem; border: 1px solid var(--border); border-radius: 4px;
    text-decoration: none; color: var(--text); }
.pagination .current { background: var(--primary); color: #fff; border-color: var(--primary); }
.gallery { position: relative; overflow: hidden; border-radius: 8px; }
.gallery .slide { display: none; }
.gallery .slide.active { display: block; }
.gallery .slide img { width: 100%; max-height: 420px; object-fit: cover; }
.gallery-prev, .gallery-next { position: absolute; top: 50%; transform: translateY(-50%);
    background: rgba(0,0,0,.45); color: #fff; border: none; padding: .4rem .7rem; cursor: pointer; }
.gallery-prev { left: .5rem; } .gallery-next { right: .5rem; }
.gallery-dots { position: absolute; bottom: .5rem; left: 0; right: 0; text-align: center; }
.gallery-dots .dot { display: inline-block; width: 9px; height: 9px; border-radius: 50%;
    background: rgba(255,255,255,.5); margin: 0 3px; border: none; cursor: pointer; padding: 0; }
.gallery-dots .dot.active { background: #fff; }
.detail-layout { display: grid; grid-template-columns: 3fr 2fr; gap: 1.5rem; }
.detail-panel { background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px; padding: 1.25rem; }
.departures li { list-style: none; padding: .3rem 0; }
.itinerary { white-space: pre-wrap; margin-top: 1rem; }
.fetch-error { text-align: center; padding: 3.5rem 1rem; }
.fetch-error p { color: var(--text-muted); margin: .75rem 0 1.25rem; }
.notice { background: #fef3c7; border: 1px solid var(--accent); border-radius: 6px;
    padding: .6rem 1rem; margin-bottom: 1rem; }
.admin-table { width: 100%; border-collapse: collapse; background: var(--card-bg); }
.admin-table th, .admin-table td { border: 1px solid var(--border); padding: .5rem .7rem; text-align: left; }
.admin-form { background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px;
    padding: 1rem; margin-top: 1.25rem; display: grid; gap: .6rem; max-width: 540px; }
@media (max-width: 800px) { .detail-layout { grid-template-columns: 1fr; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_gallery_constants() {
        let html = render_page("Trips", &SiteConfig::default(), "<p>hello</p>");
        assert!(html.contains("var INTERVAL = 3000"));
        assert!(html.contains("var COOLDOWN = 10000"));
        assert!(html.contains("<p>hello</p>"));
    }

    #[test]
    fn test_banner_only_when_enabled() {
        let mut config = SiteConfig::default();
        config.show_banner = true;
        config.banner_text = Some("Monsoon sale".to_string());
        assert!(render_page("T", &config, "").contains("Monsoon sale"));

        config.show_banner = false;
        assert!(!render_page("T", &config, "").contains("Monsoon sale"));
    }

    #[test]
    fn test_fetch_error_has_retry() {
        let html = render_fetch_error("store unreachable", "/packages");
        assert!(html.contains("Try again"));
        assert!(html.contains(r#"href="/packages""#));
    }
}
