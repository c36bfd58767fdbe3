use std::fmt::Write;

use serde::Serialize;

use crate::models::{CoinRecord, MarketView};
use crate::simulator::TICK_PERIOD;
use crate::utils::escape_html;
use crate::utils::format::{format_change, format_grouped, format_price, format_symbol, Trend};

pub const PAGE_TITLE: &str = "Top Cryptocurrencies (Simulated Live Data 🚀)";
pub const TABLE_COLUMNS: [&str; 7] = [
    "#",
    "Coin",
    "Symbol",
    "Price (USD)",
    "Market Cap",
    "24h Change (%)",
    "Total Volume",
];

pub fn render_row(index: usize, coin: &CoinRecord) -> String {
    let name = escape_html(&coin.name);
    let trend = Trend::of(coin.price_change_percentage_24h);
    format!(
        "<tr data-id=\"{id}\"><td>{rank}</td>\
         <td><img src=\"{image}\" alt=\"{name}\" width=\"25\" class=\"me-2\"/>{name}</td>\
         <td>{symbol}</td><td>${price}</td><td>${market_cap}</td>\
         <td class=\"{trend}\">{change}</td><td>${volume}</td></tr>",
        id = escape_html(&coin.id),
        rank = index + 1,
        image = escape_html(&coin.image),
        name = name,
        symbol = escape_html(&format_symbol(&coin.symbol)),
        price = format_price(coin.current_price),
        market_cap = format_grouped(coin.market_cap),
        trend = trend.css_class(),
        change = format_change(coin.price_change_percentage_24h),
        volume = format_grouped(coin.total_volume),
    )
}

pub fn render_rows(coins: &[CoinRecord]) -> String {
    coins
        .iter()
        .enumerate()
        .map(|(index, coin)| render_row(index, coin))
        .collect()
}

pub fn render_ticker_item(coin: &CoinRecord) -> String {
    let name = escape_html(&coin.name);
    format!(
        "<span><img src=\"{image}\" alt=\"{name}\"/>{name} ({symbol}) - ${price}</span>",
        image = escape_html(&coin.image),
        name = name,
        symbol = escape_html(&format_symbol(&coin.symbol)),
        price = format_price(coin.current_price),
    )
}

/// The parts of the page that change between ticks, as served to the poller.
#[derive(Serialize, Debug, Clone)]
pub struct LiveFragments {
    pub rows: String,
    pub ticker: String,
    pub alert: String,
    pub updated: String,
}

pub fn render_ticker(coins: &[CoinRecord]) -> String {
    coins.iter().map(render_ticker_item).collect()
}

pub fn render_alert(error: Option<&str>) -> String {
    match error {
        Some(error) => format!(
            "<div class=\"alert alert-danger mt-3\">{}</div>",
            escape_html(error)
        ),
        None => String::new(),
    }
}

pub fn render_updated(view: &MarketView) -> String {
    match view.snapshot.updated_at {
        Some(updated_at) => format!("Last updated {}", updated_at.format("%H:%M:%S UTC")),
        None => String::new(),
    }
}

pub fn render_fragments(view: &MarketView) -> LiveFragments {
    LiveFragments {
        rows: render_rows(&view.snapshot.coins),
        ticker: render_ticker(&view.snapshot.coins),
        alert: render_alert(view.error.as_deref()),
        updated: render_updated(view),
    }
}

pub fn render_page(view: &MarketView) -> String {
    let fragments = render_fragments(view);
    let mut page = String::with_capacity(16 * 1024);
    page.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>");
    let _ = write!(page, "<title>{}</title>", escape_html(PAGE_TITLE));
    page.push_str("</head><body><div class=\"d-flex flex-column\"><div class=\"container mt-5\">");
    let _ = write!(page, "<h2 class=\"text-center mb-4\">{}</h2>", escape_html(PAGE_TITLE));
    let _ = write!(page, "<div id=\"load-error\">{}</div>", fragments.alert);

    page.push_str(
        "<div class=\"table-responsive d-flex justify-content-center\">\
         <table class=\"table table-striped table-bordered align-middle text-center\" \
         style=\"max-width: 1200px\"><thead class=\"table-dark\"><tr>",
    );
    for column in TABLE_COLUMNS {
        let _ = write!(page, "<th>{}</th>", escape_html(column));
    }
    let _ = write!(
        page,
        "</tr></thead><tbody id=\"coin-rows\">{}</tbody></table></div>",
        fragments.rows
    );

    let _ = write!(
        page,
        "<marquee id=\"crypto-marquee\" behavior=\"scroll\" direction=\"left\" scrollamount=\"6\" \
         onmouseover=\"this.stop()\" onmouseout=\"this.start()\">{}</marquee>",
        fragments.ticker
    );
    let _ = write!(
        page,
        "<p id=\"last-updated\" class=\"text-muted text-center\">{}</p>",
        fragments.updated
    );

    // Redraws every live region from /live once per tick.
    let _ = write!(
        page,
        "</div></div><script>setInterval(function () {{\
         fetch('/live').then(function (r) {{ return r.json(); }}).then(function (live) {{\
         document.getElementById('coin-rows').innerHTML = live.rows;\
         document.getElementById('crypto-marquee').innerHTML = live.ticker;\
         document.getElementById('load-error').innerHTML = live.alert;\
         document.getElementById('last-updated').textContent = live.updated;\
         }});\
         }}, {});</script></body></html>",
        TICK_PERIOD.as_millis()
    );
    page
}
