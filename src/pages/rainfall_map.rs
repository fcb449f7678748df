//! Rainfall Map Page
//!
//! Latest reading per rainfall station, as rainy/sunny markers with a
//! popup on click.

use leptos::*;

use crate::api;
use crate::components::{default_viewport, LoadingOverlay, TileMap};
use crate::config;
use crate::geo::{RainfallStation, Viewport};
use crate::state::GlobalState;

/// Marker icon edge in pixels; the anchor is the icon centre
const ICON_SIZE: f64 = 30.0;

fn marker_icon(station: &RainfallStation) -> &'static str {
    if station.is_raining() {
        config::RAINY_ICON_URL
    } else {
        config::SUNNY_ICON_URL
    }
}

/// Stations placed inside the viewport, with their pixel positions
fn placed_stations(viewport: &Viewport, stations: &[RainfallStation]) -> Vec<(usize, f64, f64)> {
    stations
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let (x, y) = viewport.project(s.lon, s.lat);
            (idx, x, y)
        })
        .filter(|(_, x, y)| viewport.contains(*x, *y))
        .collect()
}

/// Rainfall station map component
#[component]
pub fn RainfallMap() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let viewport = default_viewport();

    let (stations, set_stations) = create_signal(Vec::<RainfallStation>::new());
    let (loading, set_loading) = create_signal(true);
    let (selected, set_selected) = create_signal(None::<usize>);

    // Fetch station readings once on mount
    create_effect(move |_| {
        let api_base = state.api_base.get_untracked();
        spawn_local(async move {
            match api::fetch_rainfall_stations(&api_base).await {
                Ok(data) => {
                    let parsed = data.rainfall_stations();
                    if parsed.len() < data.features.len() {
                        log::warn!(
                            "Skipped {} malformed rainfall features",
                            data.features.len() - parsed.len()
                        );
                    }
                    let placed = placed_stations(&viewport, &parsed).len();
                    if placed < parsed.len() {
                        log::warn!("{} rainfall stations lie outside the map", parsed.len() - placed);
                    }
                    set_stations.set(parsed);
                }
                Err(e) => {
                    log::error!("Error fetching rainfall data: {}", e);
                }
            }
            set_loading.set(false);
        });
    });

    let toggle = move |idx: usize| {
        set_selected.update(|current| {
            *current = if *current == Some(idx) { None } else { Some(idx) };
        });
    };

    view! {
        <div class="p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-bold">"Rainfall Stations"</h1>
                <RainSummary stations=stations />
            </div>

            <LoadingOverlay loading=loading>
                <TileMap
                    tile_url=config::CARTO_LIGHT_TILE_URL
                    viewport=viewport
                    attribution="© OpenStreetMap contributors © CARTO"
                >
                    // Markers
                    {move || {
                        stations.with(|all| {
                            placed_stations(&viewport, all)
                                .into_iter()
                                .map(|(idx, x, y)| {
                                    let station = &all[idx];
                                    view! {
                                        <button
                                            on:click=move |_| toggle(idx)
                                            title=station.name.clone()
                                            class="absolute p-0 border-0 bg-transparent cursor-pointer"
                                            style=format!(
                                                "left: {:.1}px; top: {:.1}px; width: {}px; height: {}px",
                                                x - ICON_SIZE / 2.0, y - ICON_SIZE / 2.0, ICON_SIZE, ICON_SIZE
                                            )
                                        >
                                            <img
                                                src=marker_icon(station)
                                                alt={if station.is_raining() { "Rain" } else { "No rain" }}
                                                class="w-full h-full rounded-full"
                                            />
                                        </button>
                                    }
                                })
                                .collect_view()
                        })
                    }}

                    // Popup for the selected station
                    {move || {
                        let idx = selected.get()?;
                        let station = stations.with(|all| all.get(idx).cloned())?;
                        let (x, y) = viewport.project(station.lon, station.lat);
                        Some(view! {
                            <StationPopup
                                station=station
                                x=x
                                y=y - ICON_SIZE / 2.0
                                on_close=Callback::new(move |_| set_selected.set(None))
                            />
                        })
                    }}
                </TileMap>
            </LoadingOverlay>
        </div>
    }
}

#[component]
fn StationPopup(
    station: RainfallStation,
    x: f64,
    y: f64,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="absolute z-10 -translate-x-1/2 -translate-y-full mb-2 bg-white rounded-lg shadow-lg px-3 py-2 text-sm"
            style=format!("left: {:.1}px; top: {:.1}px", x, y - 4.0)
        >
            <button
                on:click=move |_| on_close.call(())
                class="absolute top-0 right-1 text-stone-400 hover:text-stone-700"
                aria-label="Close"
            >
                "×"
            </button>
            <strong class="block pr-4">{station.name}</strong>
            <span class="block text-xs text-stone-500">{station.station_id}</span>
            <span>{format!("Rainfall: {} mm", station.rainfall_mm)}</span>
        </div>
    }
}

/// Count of stations currently reporting rain
#[component]
fn RainSummary(stations: ReadSignal<Vec<RainfallStation>>) -> impl IntoView {
    move || {
        stations.with(|all| {
            if all.is_empty() {
                String::new()
            } else {
                let raining = all.iter().filter(|s| s.is_raining()).count();
                format!("{} of {} stations reporting rain", raining, all.len())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lon: f64, lat: f64, rainfall_mm: f64) -> RainfallStation {
        RainfallStation {
            name: name.to_string(),
            station_id: name.to_string(),
            rainfall_mm,
            lon,
            lat,
        }
    }

    #[test]
    fn test_icon_follows_rainfall() {
        assert_eq!(marker_icon(&station("a", 103.8, 1.35, 0.2)), config::RAINY_ICON_URL);
        assert_eq!(marker_icon(&station("b", 103.8, 1.35, 0.0)), config::SUNNY_ICON_URL);
    }

    #[test]
    fn test_far_away_stations_are_not_placed() {
        let stations = vec![
            station("Marina Barrage", 103.8707, 1.2799, 0.0),
            station("Kuala Lumpur", 101.69, 3.14, 4.0),
        ];
        let placed = placed_stations(&default_viewport(), &stations);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].0, 0);
    }

    #[test]
    fn test_stations_at_both_ends_of_the_island_are_placed() {
        let stations = vec![
            station("Tuas South Avenue 3", 103.61843, 1.29377, 0.0),
            station("Pulau Tekong", 104.05, 1.403, 1.2),
            station("Marina Gardens Drive", 103.8501, 1.2897, 0.0),
        ];
        let viewport = default_viewport();
        let placed = placed_stations(&viewport, &stations);

        assert_eq!(placed.len(), 3);
        let (_, tuas_x, _) = placed[0];
        let (_, tekong_x, _) = placed[1];
        assert!(tuas_x > 0.0 && tekong_x < viewport.width);
        assert!(tuas_x < tekong_x);
    }
}
