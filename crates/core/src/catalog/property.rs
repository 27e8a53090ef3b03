//! Property detail and keyword lookup endpoints.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "v3_property_detail",
        "v3/property-detail",
        "Get property detail data by `property_id`",
        &[
            ParamDescriptor::required("property_id", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "v2_property_detail",
        "v2/property-detail",
        "Get property detail data by `property_id` V2",
        &[
            ParamDescriptor::required("property_id", ParamKind::Float, "Default: 3199790641")
                .with_default("3199790641"),
        ],
    ),
    EndpointDescriptor::get(
        "property_detail",
        "property-detail",
        "Get property detail data by `property_id`",
        &[
            ParamDescriptor::required("property_id", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "property_by_mls_id",
        "property-by-mls-id",
        "Search properties by MLS ID",
        &[
            ParamDescriptor::required("mls_id", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "keywords_search_suggest",
        "keywords-search-suggest",
        "Get keyword search suggestion for `keyword_seach` parameters in `/for-sale` endpoint",
        &[
            ParamDescriptor::required("keyword_text", ParamKind::String, ""),
            ParamDescriptor::optional("limit", ParamKind::Float, "Default: 10")
                .with_default("10"),
        ],
    ),
];
