//! Page footer.

use super::AssetImage;
use crate::catalog::FOOTER_EMBLEM;
use crate::menu::NavLink;
use leptos::prelude::*;

/// Page footer. `year` is computed by the caller at render time.
#[component]
pub fn Footer(
    /// Year shown in the copyright line
    year: i32,
    /// URL prefix for image files
    #[prop(into)]
    asset_base: String,
) -> impl IntoView {
    let copyright = format!("\u{a9} {year} Learn Klingon: Honor Your Words. All rights reserved.");

    view! {
        <footer class="footer" aria-label="Footer">
            <div class="footer-inner">
                <AssetImage
                    asset=FOOTER_EMBLEM
                    asset_base=asset_base
                    alt="Klingon emblem for Learn Klingon"
                    class="footer-emblem"
                />
                <div class="footer-meta">
                    <p>{copyright}</p>
                    <div class="footer-nav">
                        {NavLink::MENU
                            .into_iter()
                            .map(|link| view! { <a href=link.href()>{link.footer_label()}</a> })
                            .collect::<Vec<_>>()}
                        <a href="#">"Privacy Policy"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
