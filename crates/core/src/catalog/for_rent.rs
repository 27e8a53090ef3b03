//! Rental listings.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "v2_for_rent",
        "v2/for-rent",
        "Get for-rent properties. **Parameters**: `city, state_code, location, limit, offset, sort, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, in_unit_features, community_ammenities, cats_ok, dogs_ok`",
        &[
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::Float, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank Default: 48278")
                .with_default("48278"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 10")
                .with_default("10"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: frehsnest|recently_added_update|lowest_price|highest_price. Default is frehsnest"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD Default: 1000")
                .with_default("1000"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: townhome,coop,single_family,apartment,condo,condop"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::Float, "One of the following options: 1|5|10|25|50 Default: 25")
                .with_default("25"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 500")
                .with_default("500"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("in_unit_features", ParamKind::String, "Comma separated values. One or more from following options: central_air|dishwasher|washer_dryer|furnished"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: garage_1_or_more|swimming_pool|community_doorman|community_outdoor_space|community_elevator|laundry_room|community_gym"),
            ParamDescriptor::optional("cats_ok", ParamKind::Boolean, "true for Cats allowed only"),
            ParamDescriptor::optional("dogs_ok", ParamKind::Boolean, "true for Dogs allowed only"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_for_rent_by_zipcode",
        "v2/for-rent-by-zipcode",
        "Get for-rent properties. **Parameters**: `zipcode, limit, offset, sort, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, in_unit_features, community_ammenities, cats_ok, dogs_ok`",
        &[
            ParamDescriptor::required("zipcode", ParamKind::Float, "zipcode Default: 48278")
                .with_default("48278"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 10")
                .with_default("10"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: frehsnest|recently_added_update|lowest_price|highest_price. Default is frehsnest"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: townhome,coop,single_family,apartment,condo,condop"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("in_unit_features", ParamKind::String, "Comma separated values. One or more from following options: central_air|dishwasher|washer_dryer|furnished"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: garage_1_or_more|swimming_pool|community_doorman|community_outdoor_space|community_elevator|laundry_room|community_gym"),
            ParamDescriptor::optional("cats_ok", ParamKind::Boolean, "true for Cats allowed only"),
            ParamDescriptor::optional("dogs_ok", ParamKind::Boolean, "true for Dogs allowed only"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_for_rent_result_count",
        "v2/for-rent-result-count",
        "Get result count for-rent properties. **Parameters**: `city, state_code, location, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, in_unit_features, community_ammenities, cats_ok, dogs_ok`",
        &[
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::Float, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank Default: 48278")
                .with_default("48278"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD Default: 1000")
                .with_default("1000"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: townhome,coop,single_family,apartment,condo,condop"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::Float, "One of the following options: 1|5|10|25|50 Default: 25")
                .with_default("25"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 500")
                .with_default("500"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("in_unit_features", ParamKind::String, "Comma separated values. One or more from following options: central_air|dishwasher|washer_dryer|furnished"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: garage_1_or_more|swimming_pool|community_doorman|community_outdoor_space|community_elevator|laundry_room|community_gym"),
            ParamDescriptor::optional("cats_ok", ParamKind::Boolean, "true for Cats allowed only"),
            ParamDescriptor::optional("dogs_ok", ParamKind::Boolean, "true for Dogs allowed only"),
        ],
    ),
    EndpointDescriptor::get(
        "for_rent_similiar_homes",
        "v2/for-rent/similiar-homes",
        "Get similiar for-rent homes by `property_id`",
        &[
            ParamDescriptor::required("property_id", ParamKind::Float, "Default: 1207989147")
                .with_default("1207989147"),
        ],
    ),
    EndpointDescriptor::get(
        "for_rent",
        "for-rent",
        "Get for-rent properties. **Parameters**: `city, state_code, location, limit, offset, sort, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, in_unit_features, community_ammenities, cats_ok, dogs_ok`",
        &[
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::Float, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank Default: 48278")
                .with_default("48278"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 10")
                .with_default("10"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: frehsnest|recently_added_update|lowest_price|highest_price. Default is frehsnest"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD Default: 1000")
                .with_default("1000"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 1")
                .with_default("1"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 5")
                .with_default("5"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: townhome,coop,single_family,apartment,condo,condop"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::Float, "One of the following options: 1|5|10|25|50 Default: 25")
                .with_default("25"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 500")
                .with_default("500"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 3000")
                .with_default("3000"),
            ParamDescriptor::optional("in_unit_features", ParamKind::String, "Comma separated values. One or more from following options: central_air|dishwasher|washer_dryer|furnished"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: garage_1_or_more|swimming_pool|community_doorman|community_outdoor_space|community_elevator|laundry_room|community_gym"),
            ParamDescriptor::optional("cats_ok", ParamKind::Boolean, "true for Cats allowed only"),
            ParamDescriptor::optional("dogs_ok", ParamKind::Boolean, "true for Dogs allowed only"),
        ],
    ),
];
