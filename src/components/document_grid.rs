//! Grid of labeled document images with zoom-on-click.
//!
//! DESIGN
//! ======
//! A slot with no uploaded image renders a placeholder instead of a broken
//! image, so reviewers can tell "never provided" apart from a bad upload.

use leptos::prelude::*;

#[component]
pub fn DocumentGrid(
    slots: Vec<(&'static str, Option<String>)>,
    /// Receives the clicked image URL; the page renders the zoom overlay.
    zoomed: RwSignal<Option<String>>,
) -> impl IntoView {
    let figures = slots
        .into_iter()
        .map(|(label, url)| match url {
            Some(url) => {
                let open = url.clone();
                view! {
                    <figure class="document-grid__item">
                        <figcaption>{label}</figcaption>
                        <img
                            src=url
                            alt=label
                            on:click=move |_| zoomed.set(Some(open.clone()))
                        />
                    </figure>
                }
                .into_any()
            }
            None => view! {
                <figure class="document-grid__item document-grid__item--missing">
                    <figcaption>{label}</figcaption>
                    <div class="document-grid__placeholder">"Not provided"</div>
                </figure>
            }
            .into_any(),
        })
        .collect_view();

    view! { <div class="document-grid">{figures}</div> }
}
