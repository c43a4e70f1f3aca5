//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use maskshop_catalog::CategoryCard;

use crate::controller::PageController;
use crate::frontend::window::WindowNavigator;
use crate::storefront::Storefront;

type BrowserPage = PageController<WindowNavigator>;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let store = match Storefront::builtin() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "built-in collections are invalid");
            return view! { <p class="error">"The catalogue could not be loaded."</p> }.into_view();
        }
    };
    provide_context(store);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path="/:category" view=CategoryRoute/>
            </Routes>
        </Router>
    }
    .into_view()
}

fn storefront() -> Option<Storefront> {
    use_context::<Storefront>()
}

/// Landing page: every advertised category, linked where a page exists.
#[component]
fn LandingPage() -> impl IntoView {
    let cards = storefront()
        .and_then(|store| store.index().ok())
        .unwrap_or_default();

    view! {
        <div class="app">
            <header>
                <h1>"Masquerade Masks"</h1>
                <p>"Premium masks for every occasion. Order directly on WhatsApp."</p>
            </header>
            <main class="category-grid">
                {cards.into_iter().map(|card| view! { <CategoryTile card=card/> }).collect_view()}
            </main>
        </div>
    }
}

#[component]
fn CategoryTile(card: CategoryCard) -> impl IntoView {
    let body = view! {
        <img src=card.image.clone() alt=card.name.clone()/>
        <h2>{card.name.clone()}</h2>
        <p class="description">{card.description.clone()}</p>
        <p class="price">{card.price.to_string()}</p>
        <p class="items">{format!("{} designs", card.items.len())}</p>
    };

    let class = match (card.special, card.featured) {
        (true, _) => "category-card special",
        (_, true) => "category-card featured",
        _ => "category-card",
    };

    match card.page_path() {
        Some(path) => view! {
            <div class=class>
                <A href=path>{body}</A>
            </div>
        }
        .into_view(),
        None => view! {
            <div class=class>
                {body}
                <span class="badge">"Coming soon"</span>
            </div>
        }
        .into_view(),
    }
}

/// Opens a fresh page controller whenever the route parameter changes.
#[component]
fn CategoryRoute() -> impl IntoView {
    let params = use_params_map();
    let category = move || params.with(|p| p.get("category").cloned().unwrap_or_default());

    move || {
        let id = category();
        let opened = storefront().map(|store| store.open(&id, WindowNavigator));
        match opened {
            Some(Ok(page)) => view! { <CategoryPageView page=page/> }.into_view(),
            _ => view! {
                <div class="app">
                    <p>{format!("No category called `{id}`.")}</p>
                    <A href="/">"Back to all categories"</A>
                </div>
            }
            .into_view(),
        }
    }
}

#[component]
fn CategoryPageView(page: BrowserPage) -> impl IntoView {
    let (config, stats, products) = (
        page.config().clone(),
        page.stats(),
        page.catalog().products().to_vec(),
    );
    let page = create_rw_signal(page);

    let price = stats.price.map(|band| band.to_string()).unwrap_or_default();

    view! {
        <div class="app">
            <header>
                <A href="/">"All categories"</A>
                <h1>{config.title.clone()}</h1>
                <p class="tagline">{config.tagline.clone()}</p>
                <div class="stats">
                    <div><strong>{stats.designs}</strong>" Designs"</div>
                    <div><strong>{price}</strong>" "{stats.price_caption()}</div>
                </div>
                <button on:click=move |_| page.update(|p| p.show_guide())>"How to order"</button>
            </header>

            <main class="product-grid">
                {products
                    .into_iter()
                    .map(|product| {
                        let id = product.id_typed().clone();
                        let selected = {
                            let id = id.clone();
                            move || page.with(|p| p.is_selected(id.as_str()))
                        };
                        let label = selected.clone();
                        let order_id = id.to_string();
                        view! {
                            <div class="product-card" class:selected=selected>
                                <img src=product.image().to_string() alt=product.name().to_string()/>
                                <h3>{product.name().to_string()}</h3>
                                <p class="code">{product.code().to_string()}</p>
                                <p class="description">{product.description().to_string()}</p>
                                <p class="price">{product.price().to_string()}</p>
                                <button on:click=move |_| {
                                    page.update(|p| {
                                        p.toggle(&id);
                                    })
                                }>
                                    {move || if label() { "Selected" } else { "Select" }}
                                </button>
                                <button on:click=move |_| {
                                    page.update(|p| {
                                        p.order_one(&order_id);
                                    })
                                }>
                                    "Order now"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </main>

            {move || {
                let summary = page.with(|p| p.summary());
                summary.is_visible().then(|| view! {
                    <div class="selection-bar">
                        <span>{summary.label}</span>
                        <span class="total">{summary.total_price.to_string()}</span>
                        <button on:click=move |_| page.update(|p| p.clear())>"Clear"</button>
                        <button on:click=move |_| {
                            page.update(|p| {
                                p.order_selected();
                            })
                        }>
                            "Order Selected"
                        </button>
                    </div>
                })
            }}

            {move || page.with(|p| p.guide_visible()).then(|| view! { <GuideModal page=page/> })}
        </div>
    }
}

#[component]
fn GuideModal(page: RwSignal<BrowserPage>) -> impl IntoView {
    view! {
        <div class="guide-modal">
            <h2>"How to order"</h2>
            <ol>
                <li>"Tap \"Order now\" on a mask to order it straight away on WhatsApp."</li>
                <li>"Or tap \"Select\" on several masks, then \"Order Selected\" to send them in one message."</li>
                <li>"We confirm availability and delivery details in the chat."</li>
            </ol>
            <button on:click=move |_| page.update(|p| p.hide_guide())>"Got it"</button>
        </div>
    }
}
