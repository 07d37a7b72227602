use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{on_click, ElementBuilder};
use crate::models::Deal;

/// Tarjeta de oferta con botón de favorito
pub fn render_deal_card(ctx: &AppContext, deal: &Deal, is_favorite: bool) -> Result<Element, JsValue> {
    let fav_class = if is_favorite {
        "fav-button fav-active"
    } else {
        "fav-button"
    };
    let fav_button = ElementBuilder::new("button")?
        .class(fav_class)
        .attr("type", "button")?
        .text("⭐")
        .build();
    {
        let deals = ctx.deals.clone();
        let deal = deal.clone();
        on_click(&fav_button, move |_| {
            let deals = deals.clone();
            let deal = deal.clone();
            spawn_local(async move {
                // El error ya se registró/notificó en el viewmodel
                let _ = deals.toggle_favorite(&deal).await;
                crate::rerender_app();
            });
        })?;
    }

    let thumbnail = ElementBuilder::new("img")?
        .attr("src", &deal.thumbnail)?
        .attr("alt", &deal.title)?
        .build();

    let title = ElementBuilder::new("h3")?
        .class("deal-title")
        .text(&deal.title)
        .build();

    let price_box = ElementBuilder::new("div")?
        .class("price-box")
        .children([
            ElementBuilder::new("span")?
                .class("old-price")
                .text(&format!("{}€", deal.normal_price))
                .build(),
            ElementBuilder::new("span")?
                .class("new-price")
                .text(&format!("{}€", deal.sale_price))
                .build(),
            ElementBuilder::new("span")?
                .class("discount")
                .text(&deal.discount)
                .build(),
        ])?
        .build();

    let link = ElementBuilder::new("a")?
        .class("deal-btn")
        .attr("href", &deal.deal_url)?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text("Ver oferta")
        .build();

    Ok(ElementBuilder::new("div")?
        .class("deal-card")
        .attr("data-key", &deal.steam_app_id)?
        .children([fav_button, thumbnail, title, price_box, link])?
        .build())
}
