//! Dengue Map Page
//!
//! Dengue cluster polygons over an OpenStreetMap base layer.

use leptos::*;

use crate::api;
use crate::components::{default_viewport, LoadingOverlay, TileMap};
use crate::config;
use crate::geo::{FeatureCollection, Shape, Viewport};
use crate::state::GlobalState;

const CLUSTER_STROKE: &str = "#3388ff";
const CLUSTER_FILL: &str = "rgba(51, 136, 255, 0.2)";

/// SVG shapes for every feature, with its name for hover text
fn overlay_shapes(viewport: &Viewport, clusters: &FeatureCollection) -> Vec<(Shape, Option<String>)> {
    clusters
        .features
        .iter()
        .flat_map(|feature| {
            let name = feature.name().map(str::to_string);
            feature
                .geometry
                .iter()
                .flat_map(|g| viewport.shapes(g))
                .map(move |shape| (shape, name.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Dengue cluster map component
#[component]
pub fn DengueMap() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let viewport = default_viewport();

    let (clusters, set_clusters) = create_signal(None::<FeatureCollection>);
    let (loading, set_loading) = create_signal(true);

    // Fetch the cluster layer once on mount
    create_effect(move |_| {
        let api_base = state.api_base.get_untracked();
        spawn_local(async move {
            match api::fetch_dengue_clusters(&api_base).await {
                Ok(data) => {
                    log::debug!("Loaded {} dengue cluster features", data.features.len());
                    set_clusters.set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to fetch GeoJSON: {}", e);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="p-4 space-y-3">
            <h1 class="text-xl font-bold">"Dengue Clusters"</h1>

            <LoadingOverlay loading=loading>
                <TileMap tile_url=config::OSM_TILE_URL viewport=viewport>
                    <svg
                        class="absolute inset-0 pointer-events-none"
                        width=viewport.width
                        height=viewport.height
                        viewBox=format!("0 0 {} {}", viewport.width, viewport.height)
                    >
                        {move || {
                            clusters.with(|data| {
                                data.as_ref()
                                    .map(|fc| overlay_shapes(&viewport, fc))
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|(shape, name)| render_shape(shape, name))
                                    .collect_view()
                            })
                        }}
                    </svg>
                </TileMap>
            </LoadingOverlay>
        </div>
    }
}

fn render_shape(shape: Shape, name: Option<String>) -> View {
    let title = name.unwrap_or_default();
    match shape {
        Shape::Area(d) => view! {
            <g>
                <title>{title}</title>
                <path d=d stroke=CLUSTER_STROKE stroke-width="2" fill=CLUSTER_FILL fill-rule="evenodd" />
            </g>
        }
        .into_view(),
        Shape::Line(points) => view! {
            <g>
                <title>{title}</title>
                <polyline points=points stroke=CLUSTER_STROKE stroke-width="3" fill="none" />
            </g>
        }
        .into_view(),
        Shape::Dot(x, y) => view! {
            <g>
                <title>{title}</title>
                <circle cx=x cy=y r="5" stroke=CLUSTER_STROKE stroke-width="2" fill=CLUSTER_FILL />
            </g>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_shapes_carry_names() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"Name": "kml_1"},
             "geometry": {"type": "MultiPolygon", "coordinates": [
                [[[103.80, 1.30], [103.81, 1.30], [103.81, 1.31], [103.80, 1.30]]],
                [[[103.85, 1.35], [103.86, 1.35], [103.86, 1.36], [103.85, 1.35]]]
             ]}},
            {"type": "Feature", "properties": {}, "geometry": null}
        ]}"#;
        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        let shapes = overlay_shapes(&default_viewport(), &fc);

        assert_eq!(shapes.len(), 2);
        assert!(shapes.iter().all(|(_, name)| name.as_deref() == Some("kml_1")));
        assert!(matches!(shapes[0].0, Shape::Area(_)));
    }

    #[test]
    fn test_empty_collection_draws_nothing() {
        let shapes = overlay_shapes(&default_viewport(), &FeatureCollection::default());
        assert!(shapes.is_empty());
    }
}
