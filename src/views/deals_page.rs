// ============================================================================
// DEALS PAGE VIEW - Filtros, grid de ofertas y paginación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{on_click, on_select_change, ElementBuilder};
use crate::models::SortBy;
use crate::state::FetchStatus;
use crate::utils::constants::MIN_DISCOUNT_OPTIONS;
use crate::views::deal_card::render_deal_card;

/// Renderizar la vista autenticada
pub fn render_deals_page(ctx: &AppContext) -> Result<Element, JsValue> {
    let filters = ctx.state.deals.filters();
    let status = ctx.state.deals.get_status();
    let loading = matches!(status, FetchStatus::Loading);

    let mut children = vec![
        render_logout_button(ctx)?,
        ElementBuilder::new("h1")?
            .class("app-title")
            .text("🎮 Ofertas en Steam")
            .build(),
        render_filters(ctx)?,
    ];

    if loading {
        children.push(
            ElementBuilder::new("h2")?
                .attr("style", "text-align: center")?
                .text("Cargando...")
                .build(),
        );
    } else if let FetchStatus::Failed(reason) = &status {
        if !filters.show_favorites {
            children.push(render_fetch_error(ctx, reason)?);
        }
    }

    let grid = ElementBuilder::new("div")?.class("deals-grid").build();
    if !loading {
        for deal in ctx.deals.visible_deals() {
            let is_favorite = ctx.state.deals.is_favorite(&deal.deal_url);
            let card = render_deal_card(ctx, &deal, is_favorite)?;
            grid.append_child(&card)?;
        }
    }
    children.push(grid);

    if !filters.show_favorites {
        children.push(render_pagination(ctx)?);
    }

    Ok(ElementBuilder::new("div")?
        .class("deals-page")
        .children(children)?
        .build())
}

fn render_logout_button(ctx: &AppContext) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("logout-button")
        .attr("type", "button")?
        .text("🚪 Logout")
        .build();
    let auth = ctx.auth.clone();
    on_click(&button, move |_| {
        auth.logout();
        crate::rerender_app();
    })?;
    Ok(button)
}

fn render_filters(ctx: &AppContext) -> Result<Element, JsValue> {
    let filters = ctx.state.deals.filters();

    let fav_toggle = ElementBuilder::new("button")?
        .class("fav-toggle")
        .attr("type", "button")?
        .text(if filters.show_favorites {
            "Ver ofertas"
        } else {
            "Ver favoritos ⭐"
        })
        .build();
    {
        let deals = ctx.state.deals.clone();
        on_click(&fav_toggle, move |_| {
            deals.toggle_show_favorites();
            crate::rerender_app();
        })?;
    }

    let sort_options = [SortBy::Discount, SortBy::Price]
        .into_iter()
        .map(|sort_by| {
            render_option(sort_by.as_value(), sort_by.label(), sort_by == filters.sort_by)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let sort_select = ElementBuilder::new("select")?
        .class("filter-select")
        .children(sort_options)?
        .build();
    {
        let deals = ctx.state.deals.clone();
        on_select_change(&sort_select, move |value| {
            if let Some(sort_by) = SortBy::from_value(&value) {
                deals.set_sort_by(sort_by);
                crate::rerender_app();
            }
        })?;
    }

    let discount_options = MIN_DISCOUNT_OPTIONS
        .iter()
        .map(|(threshold, label)| {
            render_option(&threshold.to_string(), label, *threshold == filters.min_discount)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let discount_select = ElementBuilder::new("select")?
        .class("filter-select")
        .children(discount_options)?
        .build();
    {
        let deals = ctx.state.deals.clone();
        on_select_change(&discount_select, move |value| {
            if let Ok(threshold) = value.parse::<i64>() {
                deals.set_min_discount(threshold);
                crate::rerender_app();
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("filters")
        .children([fav_toggle, sort_select, discount_select])?
        .build())
}

fn render_option(value: &str, label: &str, selected: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("option")?
        .attr("value", value)?
        .flag("selected", selected)?
        .text(label)
        .build())
}

fn render_fetch_error(ctx: &AppContext, reason: &str) -> Result<Element, JsValue> {
    let retry = ElementBuilder::new("button")?
        .class("page-btn")
        .attr("type", "button")?
        .text("Reintentar")
        .build();
    {
        let ctx = ctx.clone();
        on_click(&retry, move |_| ctx.load_current_page())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("fetch-error")
        .attr("title", reason)?
        .child(
            ElementBuilder::new("p")?
                .text("⚠️ No se pudieron cargar las ofertas")
                .build(),
        )?
        .child(retry)?
        .build())
}

fn render_pagination(ctx: &AppContext) -> Result<Element, JsValue> {
    let page = ctx.state.deals.get_current_page();

    let previous = ElementBuilder::new("button")?
        .class("page-btn")
        .attr("type", "button")?
        .flag("disabled", page == 0)?
        .text("⬅️ Anterior")
        .build();
    {
        let ctx = ctx.clone();
        on_click(&previous, move |_| {
            if ctx.deals.previous_page().is_some() {
                ctx.load_current_page();
            }
        })?;
    }

    let label = ElementBuilder::new("span")?
        .class("page-number")
        .text(&format!("Página {}", page + 1))
        .build();

    let next = ElementBuilder::new("button")?
        .class("page-btn")
        .attr("type", "button")?
        .text("Siguiente ➡️")
        .build();
    {
        let ctx = ctx.clone();
        on_click(&next, move |_| {
            ctx.deals.next_page();
            ctx.load_current_page();
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("pagination")
        .children([previous, label, next])?
        .build())
}
