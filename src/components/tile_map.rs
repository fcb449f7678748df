//! Tile Map Component
//!
//! Static slippy map: a grid of raster tiles with overlays drawn on top in
//! the same pixel space.

use leptos::*;

use crate::config;
use crate::geo::Viewport;

/// The fixed viewport both maps share
pub fn default_viewport() -> Viewport {
    Viewport::new(config::MAP_CENTER, config::MAP_ZOOM, config::MAP_WIDTH, config::MAP_HEIGHT)
}

/// Map shell; `children` are laid over the tiles
#[component]
pub fn TileMap(
    /// `{z}/{x}/{y}` tile URL template
    tile_url: &'static str,
    viewport: Viewport,
    #[prop(default = "© OpenStreetMap contributors")]
    attribution: &'static str,
    children: Children,
) -> impl IntoView {
    let tiles = viewport.tiles();

    view! {
        <div
            class="relative overflow-hidden rounded-lg bg-stone-200 max-w-full"
            style=format!("width: {}px; height: {}px", viewport.width, viewport.height)
        >
            {tiles.into_iter().map(|tile| view! {
                <img
                    src=tile.url(tile_url)
                    alt=""
                    draggable="false"
                    class="absolute select-none pointer-events-none"
                    style=format!(
                        "left: {:.0}px; top: {:.0}px; width: 256px; height: 256px",
                        tile.left, tile.top
                    )
                />
            }).collect_view()}

            {children()}

            <div class="absolute bottom-0 right-0 bg-white/80 px-1 text-[10px] text-stone-600">
                {attribution}
            </div>
        </div>
    }
}
