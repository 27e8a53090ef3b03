//! Location metadata: suggestions, nearby areas, schools, commute and noise.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "location_suggest",
        "location/suggest",
        "Get location suggestion / autocomplete **Required Parameter**: `input` **Optional Parameter**:",
        &[
            ParamDescriptor::required("input", ParamKind::String, "Part of location name"),
        ],
    ),
    EndpointDescriptor::get(
        "location_for_sale_nearby_areas",
        "location/for-sale-nearby-areas",
        "Get nearby areas for **include_nearby_areas_slug_id** parameter in **/for-sale** endpoint. Get by (area_type=\"city\" & city & state_code) or by (area_type=\"neighborhood\" & city & state_code & neighborhood) or by (area_type=\"postal_code\" & postal_code)",
        &[
            ParamDescriptor::required("area_type", ParamKind::String, "One of the following options: city|neighborhood"),
            ParamDescriptor::optional("city", ParamKind::String, ""),
            ParamDescriptor::optional("neighborhood", ParamKind::String, ""),
            ParamDescriptor::optional("postal_code", ParamKind::String, ""),
            ParamDescriptor::optional("state_code", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "location_for_sale_nearby_areas_by_postal_code",
        "location/for-sale-nearby-areas-by-postal-code",
        "Get nearby areas by `postal_code` for **include_nearby_areas_slug_id** parameter in **/for-sale** endpoint.",
        &[
            ParamDescriptor::required("postal_code", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "location_for_rent_nearby_areas",
        "location/for-rent-nearby-areas",
        "Get nearby areas for **include_nearby_areas_slug_id** parameter in **/for-rent**. Get by (area_type=\"city\" & city & state_code) or by (area_type=\"neighborhood\" & city & state_code & neighborhood) or by (area_type=\"postal_code\" & postal_code)",
        &[
            ParamDescriptor::required("area_type", ParamKind::String, "One of the following options: city|postal_code|neighborhood"),
            ParamDescriptor::optional("city", ParamKind::String, ""),
            ParamDescriptor::optional("neighborhood", ParamKind::String, ""),
            ParamDescriptor::optional("state_code", ParamKind::String, ""),
            ParamDescriptor::optional("postal_code", ParamKind::Float, "Default: 14218")
                .with_default("14218"),
        ],
    ),
    EndpointDescriptor::get(
        "location_schools",
        "location/schools",
        "Get schools near a location by (**state_code & city**) or by (**state_code & city & neighborhood**) or by **postal_code**",
        &[
            ParamDescriptor::optional("postal_code", ParamKind::Float, "Default: 14218")
                .with_default("14218"),
            ParamDescriptor::optional("city", ParamKind::String, ""),
            ParamDescriptor::optional("state_code", ParamKind::String, ""),
            ParamDescriptor::optional("neighborhood", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "location_commute_time",
        "location/commute-time",
        "Get commute time from origins to destinations with one of following mode: walking|driving|bicycling|transit",
        &[
            ParamDescriptor::required("origins", ParamKind::String, "Origin location: address, city+state_code, neighborhood, postal_code, etc"),
            ParamDescriptor::required("destinations", ParamKind::String, "Destination location: address, city+state_code, neighborhood, postal_code, etc"),
            ParamDescriptor::required("mode", ParamKind::String, "One of the following options: driving|walking|bicycling|transit"),
        ],
    ),
    EndpointDescriptor::get(
        "location_noise_score",
        "location/noise-score",
        "Get location noise score by (**latitude & longitude**)",
        &[
            ParamDescriptor::required("longitude", ParamKind::Float, "Default: -73.95471")
                .with_default("-73.95471"),
            ParamDescriptor::required("latitude", ParamKind::Float, "Default: 40.769135")
                .with_default("40.769135"),
        ],
    ),
];
