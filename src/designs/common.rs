use url::form_urlencoded;

use crate::grid::CONTACT_ANCHOR;
use crate::models::page::{Card, DockButton, Grid};
use crate::render::html_escape;

/// Theme dock: one small POST form per theme so switching works without JS.
pub(crate) fn build_theme_dock(dock: &[DockButton]) -> String {
    let mut html = String::from("<nav id=\"theme-dock\" class=\"theme-dock\" aria-label=\"Theme\">");
    for button in dock {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/theme\">\
             <button type=\"submit\" name=\"theme\" value=\"{id}\" data-theme-id=\"{id}\"{active} aria-pressed=\"{pressed}\">{label}</button>\
             </form>",
            id = html_escape(&button.theme_id),
            active = if button.active { " class=\"active\"" } else { "" },
            pressed = button.active,
            label = html_escape(&button.label),
        ));
    }
    html.push_str("</nav>");
    html
}

pub(crate) fn build_grid(grid: &Grid) -> String {
    let mut html = format!("<div id=\"{}\" class=\"card-grid\">", grid.id);
    for card in &grid.cards {
        render_card(&mut html, card);
    }
    html.push_str("</div>");
    html
}

pub(crate) fn render_card(html: &mut String, card: &Card) {
    html.push_str("<div class=\"card\">");

    if let Some(img) = &card.img {
        html.push_str(&format!(
            "<img class=\"card-img\" loading=\"lazy\" src=\"{}\" alt=\"{}\">",
            html_escape(&img.src),
            html_escape(&img.alt)
        ));
    }

    if let Some(price) = &card.price {
        html.push_str(&format!("<div class=\"price-tag\">{}</div>", html_escape(price)));
    }

    html.push_str(&format!(
        "<h3>{}</h3><p>{}</p>",
        html_escape(&card.title),
        html_escape(&card.desc)
    ));

    if !card.badges.is_empty() {
        html.push_str("<div class=\"badge-row\">");
        for badge in &card.badges {
            html.push_str(&format!("<span class=\"badge\">{}</span>", html_escape(badge)));
        }
        html.push_str("</div>");
    }

    html.push_str(&format!(
        "<a class=\"select-link\" href=\"{}\" rel=\"noopener\">{}</a>",
        html_escape(&card.action.href),
        html_escape(&card.action.label)
    ));

    if card.action.href == CONTACT_ANCHOR && !card.title.trim().is_empty() {
        html.push_str(&format!(
            "<noscript><a class=\"select-fallback\" href=\"{}\">{}</a></noscript>",
            html_escape(&pick_href(&card.title)),
            html_escape(&card.action.label)
        ));
    }

    html.push_str("</div>");
}

/// Server-side card pick for visitors without JS: `GET /?pick=<title>#contact`.
pub(crate) fn pick_href(title: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(title.trim().as_bytes()).collect();
    format!("/?pick={}{}", encoded, CONTACT_ANCHOR)
}

/// Client-side card-to-dropdown matching, same rule as
/// `selector::select_from_card`.
pub(crate) fn card_select_script() -> &'static str {
    r#"<script>
(function(){
document.addEventListener('click',function(e){
    var a=e.target&&e.target.closest?e.target.closest('a.select-link'):null;
    if(!a||a.getAttribute('href')!=='#contact')return;
    var card=a.closest('.card');
    var h=card?card.querySelector('h3'):null;
    var title=h?h.textContent.trim():'';
    if(!title)return;
    var select=document.getElementById('service');
    if(!select)return;
    var opts=select.querySelectorAll('optgroup option');
    for(var i=0;i<opts.length;i++){
        if(opts[i].textContent.indexOf(title+' (')===0){select.value=opts[i].value;break;}
    }
});
var f=document.getElementById('contact-form');
var btn=document.getElementById('submit-btn');
var idle=btn?btn.textContent:'';
function filled(id){var el=document.getElementById(id);return !!el&&el.value.trim()!=='';}
if(f)f.addEventListener('submit',function(){
    if(!btn)return;
    if(!(filled('name')&&filled('email')&&filled('service')&&filled('timeline')&&filled('message')))return;
    btn.disabled=true;btn.textContent='Sending…';
});
window.addEventListener('pageshow',function(){
    if(btn){btn.disabled=false;btn.textContent=idle;}
});
})();
</script>"#
}
