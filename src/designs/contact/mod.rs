use crate::contact::{TIMELINE_OPTIONS, TIMELINE_PLACEHOLDER};
use crate::models::page::{ContactForm, Notice, NoticeKind, ServiceSelect};
use crate::render::html_escape;

/// Build the contact section: notice, form fields, grouped service dropdown.
pub fn render_body(form: &ContactForm, select: &ServiceSelect, notice: Option<&Notice>) -> String {
    let flash_html = match notice {
        Some(n) if n.kind == NoticeKind::Success => format!(
            "<div class=\"contact-flash contact-flash-success\" role=\"status\">{}</div>",
            html_escape(&n.message)
        ),
        Some(n) => format!(
            "<div class=\"contact-flash contact-flash-error\" role=\"alert\">{}</div>",
            html_escape(&n.message)
        ),
        None => String::new(),
    };

    format!(
        r#"<section id="contact" class="contact-page">
<h2 class="contact-title">Start a Project</h2>
{flash_html}<form id="contact-form" method="post" action="/contact" class="contact-form">
<div class="contact-form-group"><label for="name">Name</label><input type="text" id="name" name="name" value="{name}" placeholder="Your name"></div>
<div class="contact-form-group"><label for="email">Email</label><input type="email" id="email" name="email" value="{email}" placeholder="your@email.com"></div>
<div class="contact-form-group"><label for="service">Service</label>{service}</div>
<div class="contact-form-group"><label for="timeline">Timeline</label>{timeline}</div>
<div class="contact-form-group"><label for="message">Message</label><textarea id="message" name="message" rows="6" placeholder="Tell us about the project…">{message}</textarea></div>
<button type="submit" id="submit-btn" class="contact-submit"{disabled}>{label}</button>
</form>
</section>"#,
        flash_html = flash_html,
        name = html_escape(&form.name),
        email = html_escape(&form.email),
        service = render_service_select(select),
        timeline = render_timeline_select(&form.timeline),
        message = html_escape(&form.message),
        disabled = if form.submit.disabled { " disabled" } else { "" },
        label = html_escape(&form.submit.label),
    )
}

pub fn render_service_select(select: &ServiceSelect) -> String {
    let mut html = format!(
        "<select id=\"service\" name=\"service\"><option value=\"\" disabled{}>{}</option>",
        if select.value.is_none() { " selected" } else { "" },
        html_escape(&select.placeholder)
    );
    for group in &select.groups {
        html.push_str(&format!("<optgroup label=\"{}\">", html_escape(&group.label)));
        for opt in &group.options {
            let selected = select.value.as_deref() == Some(opt.value.as_str());
            html.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>",
                html_escape(&opt.value),
                if selected { " selected" } else { "" },
                html_escape(&opt.label)
            ));
        }
        html.push_str("</optgroup>");
    }
    html.push_str("</select>");
    html
}

fn render_timeline_select(current: &str) -> String {
    let mut html = format!(
        "<select id=\"timeline\" name=\"timeline\"><option value=\"\" disabled{}>{}</option>",
        if current.is_empty() { " selected" } else { "" },
        TIMELINE_PLACEHOLDER
    );
    for opt in TIMELINE_OPTIONS {
        html.push_str(&format!(
            "<option value=\"{v}\"{s}>{v}</option>",
            v = html_escape(opt),
            s = if *opt == current { " selected" } else { "" }
        ));
    }
    html.push_str("</select>");
    html
}

pub fn css() -> &'static str {
    r#"<style>
.contact-page { max-width:640px; margin:0 auto; padding:60px 20px; }
.contact-title { font-size:2em; margin-bottom:24px; }
.contact-flash { padding:12px; margin-bottom:16px; border-radius:var(--radius); font-size:14px; }
.contact-flash-success { background:rgba(34,197,94,.12); color:#16a34a; }
.contact-flash-error { background:rgba(239,68,68,.12); color:#ef4444; }
.contact-form-group { margin-bottom:16px; }
.contact-form-group label { display:block; font-size:.9em; font-weight:600; margin-bottom:6px; }
.contact-form-group input,
.contact-form-group select,
.contact-form-group textarea {
    width:100%; padding:10px 12px; font-size:.95em; border:1px solid rgba(128,128,128,.3);
    background:transparent; color:inherit; border-radius:var(--radius); font-family:inherit;
    box-sizing:border-box;
}
.contact-form-group textarea { resize:vertical; }
.contact-submit {
    display:inline-block; padding:12px 28px; font-size:.95em; font-weight:600;
    background:var(--accent); color:#fff; border:none; border-radius:var(--radius); cursor:pointer;
    font-family:inherit;
}
.contact-submit[disabled] { opacity:.6; cursor:wait; }
</style>"#
}
