//! Listings for sale and recently sold homes.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "v3_for_sale",
        "v3/for-sale",
        "Search for-sale properties. **Parameters**: ` **state_code**,city, location, sort, limit, offset, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, property_type_nyc_only, new_construction, hide_pending_contingent, has_virtual_tours, has_3d_tours, hide_foreclosure, price_reduced, open_house, keywords, no_hoa_fee, hoa_max, days_on_realtor, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max, stories, garage, heating_cooling, inside_rooms, outside_features, lot_views, community_ammenities, features_in_nyc_only`",
        &[
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::optional("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: relevant|newest|lowest_price|highest_price|open_house_date|price_reduced_date|largest_sqft|lot_size|sold_date. Default is newest"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 42")
                .with_default("42"),
            ParamDescriptor::optional("location", ParamKind::String, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank"),
            ParamDescriptor::optional("price_min", ParamKind::String, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::String, "Maximum list price in USD"),
            ParamDescriptor::optional("beds_min", ParamKind::String, "Minimum bedrooms"),
            ParamDescriptor::optional("beds_max", ParamKind::String, "Maximum bedrooms"),
            ParamDescriptor::optional("baths_min", ParamKind::String, "Minimum bathrooms"),
            ParamDescriptor::optional("baths_max", ParamKind::String, "Maximum bathrooms"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("property_type_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: condo|coop|condop. For NYC listings only"),
            ParamDescriptor::optional("new_construction", ParamKind::String, "true for New construction only. Leave blank for any"),
            ParamDescriptor::optional("hide_pending_contingent", ParamKind::String, "true for hide pending/contingent. Leave blank for any"),
            ParamDescriptor::optional("has_virtual_tours", ParamKind::String, "true for properties with virtual tour only. Leave blank for any"),
            ParamDescriptor::optional("has_3d_tours", ParamKind::String, "true for properties with 3D tour only. Leave blank for any"),
            ParamDescriptor::optional("hide_foreclosure", ParamKind::String, "true for hide foreclosure. Leave blank for any"),
            ParamDescriptor::optional("price_reduced", ParamKind::String, "true for properties with price reduced only. Leave blank for any"),
            ParamDescriptor::optional("open_house", ParamKind::String, "true for properties with open house only. Leave blank for any"),
            ParamDescriptor::optional("keywords", ParamKind::String, "Comma separated values. Get popular keywords from /keywords-search-suggest response"),
            ParamDescriptor::optional("no_hoa_fee", ParamKind::String, "true for properties without HOA fee only. Leave blank for any"),
            ParamDescriptor::optional("hoa_max", ParamKind::String, "Maximum HOA fee in USD"),
            ParamDescriptor::optional("days_on_realtor", ParamKind::String, "One of the following options: today|7|14|21|30"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::String, "One of the following options: 1|5|10|25|50. Expand search by radius in miles"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-sale-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::String, "One of the following options: 750|1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500. Minimum home size in sqft"),
            ParamDescriptor::optional("home_size_max", ParamKind::String, "One of the following options: 1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500|10000. Maximum home size in sqft"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
            ParamDescriptor::optional("stories", ParamKind::String, "One of the following options: single|multi"),
            ParamDescriptor::optional("garage", ParamKind::String, "One of the following options: 1+|2+|3+"),
            ParamDescriptor::optional("heating_cooling", ParamKind::String, "Comma separated values. One or more from following options: central_air|central_heat|forced_air"),
            ParamDescriptor::optional("inside_rooms", ParamKind::String, "Comma separated values. One or more comma separated from following options: basement|hardwood_floors|fireplace|disability_features|den_or_office|family_room|dining_room"),
            ParamDescriptor::optional("outside_features", ParamKind::String, "Comma separated values. One or more from following options: swimming_pool|spa_or_hot_tub|horse_facilities"),
            ParamDescriptor::optional("lot_views", ParamKind::String, "Comma separated values. One or more from following options: waterfront|cul_de_sac|corner_lot|golf_course_lot_or_frontage|hill_or_mountain_view|ocean_view|lake_view|river_view"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: community_swimming_pool|community_spa_or_hot_tub|community_golf|community_security_features|community_boat_facilities|tennis_court|community_clubhouse|senior_community"),
            ParamDescriptor::optional("features_in_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: furniture|dishwasher|community_doorman|pets_allowed|laundry_room|elevator|community_outdoor_space"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_for_sale",
        "v2/for-sale",
        "Search for-sale properties. **Parameters**: `city, state_code, location, limit, offset, sort:newest price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, property_type_nyc_only, new_construction, hide_pending_contingent, has_virtual_tours, has_3d_tours, hide_foreclosure, price_reduced, open_house, keywords, no_hoa_fee, hoa_max, days_on_realtor, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max, stories, garage, heating_cooling, inside_rooms, outside_features, lot_views, community_ammenities, features_in_nyc_only`",
        &[
            ParamDescriptor::required("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::required("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 42")
                .with_default("42"),
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::String, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: relevant|newest|lowest_price|highest_price|open_house_date|price_reduced_date|largest_sqft|lot_size|sold_date. Default is relevant"),
            ParamDescriptor::optional("price_min", ParamKind::String, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::String, "Maximum list price in USD"),
            ParamDescriptor::optional("beds_min", ParamKind::String, "Minimum bedrooms"),
            ParamDescriptor::optional("beds_max", ParamKind::String, "Maximum bedrooms"),
            ParamDescriptor::optional("baths_min", ParamKind::String, "Minimum bathrooms"),
            ParamDescriptor::optional("baths_max", ParamKind::String, "Maximum bathrooms"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("property_type_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: condo|coop|condop. For NYC listings only"),
            ParamDescriptor::optional("new_construction", ParamKind::String, "true for New construction only. Leave blank for any"),
            ParamDescriptor::optional("hide_pending_contingent", ParamKind::String, "true for hide pending/contingent. Leave blank for any"),
            ParamDescriptor::optional("has_virtual_tours", ParamKind::String, "true for properties with virtual tour only. Leave blank for any"),
            ParamDescriptor::optional("has_3d_tours", ParamKind::String, "true for properties with 3D tour only. Leave blank for any"),
            ParamDescriptor::optional("hide_foreclosure", ParamKind::String, "true for hide foreclosure. Leave blank for any"),
            ParamDescriptor::optional("price_reduced", ParamKind::String, "true for properties with price reduced only. Leave blank for any"),
            ParamDescriptor::optional("open_house", ParamKind::String, "true for properties with open house only. Leave blank for any"),
            ParamDescriptor::optional("keywords", ParamKind::String, "Comma separated values. Get popular keywords from /keywords-search-suggest response"),
            ParamDescriptor::optional("no_hoa_fee", ParamKind::String, "true for properties without HOA fee only. Leave blank for any"),
            ParamDescriptor::optional("hoa_max", ParamKind::String, "Maximum HOA fee in USD"),
            ParamDescriptor::optional("days_on_realtor", ParamKind::String, "One of the following options: today|7|14|21|30"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::String, "One of the following options: 1|5|10|25|50. Expand search by radius in miles"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-sale-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::String, "One of the following options: 750|1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500. Minimum home size in sqft"),
            ParamDescriptor::optional("home_size_max", ParamKind::String, "One of the following options: 1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500|10000. Maximum home size in sqft"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
            ParamDescriptor::optional("stories", ParamKind::String, "One of the following options: single|multi"),
            ParamDescriptor::optional("garage", ParamKind::String, "One of the following options: 1+|2+|3+"),
            ParamDescriptor::optional("heating_cooling", ParamKind::String, "Comma separated values. One or more from following options: central_air|central_heat|forced_air"),
            ParamDescriptor::optional("inside_rooms", ParamKind::String, "Comma separated values. One or more comma separated from following options: basement|hardwood_floors|fireplace|disability_features|den_or_office|family_room|dining_room"),
            ParamDescriptor::optional("outside_features", ParamKind::String, "Comma separated values. One or more from following options: swimming_pool|spa_or_hot_tub|horse_facilities"),
            ParamDescriptor::optional("lot_views", ParamKind::String, "Comma separated values. One or more from following options: waterfront|cul_de_sac|corner_lot|golf_course_lot_or_frontage|hill_or_mountain_view|ocean_view|lake_view|river_view"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: community_swimming_pool|community_spa_or_hot_tub|community_golf|community_security_features|community_boat_facilities|tennis_court|community_clubhouse|senior_community"),
            ParamDescriptor::optional("features_in_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: furniture|dishwasher|community_doorman|pets_allowed|laundry_room|elevator|community_outdoor_space"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_for_sale_by_zipcode",
        "v2/for-sale-by-zipcode",
        "Search for-sale properties. **Parameters**: `zipcode, limit, offset, sort:newest price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, property_type_nyc_only, new_construction, hide_pending_contingent, has_virtual_tours, has_3d_tours, hide_foreclosure, price_reduced, open_house, keywords, no_hoa_fee, hoa_max, days_on_realtor, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max, stories, garage, heating_cooling, inside_rooms, outside_features, lot_views, community_ammenities, features_in_nyc_only`",
        &[
            ParamDescriptor::required("zipcode", ParamKind::String, "zipcode"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 42")
                .with_default("42"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: relevant|newest|lowest_price|highest_price|open_house_date|price_reduced_date|largest_sqft|lot_size|sold_date. Default is relevant"),
            ParamDescriptor::optional("price_min", ParamKind::String, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::String, "Maximum list price in USD"),
            ParamDescriptor::optional("beds_min", ParamKind::String, "Minimum bedrooms"),
            ParamDescriptor::optional("beds_max", ParamKind::String, "Maximum bedrooms"),
            ParamDescriptor::optional("baths_min", ParamKind::String, "Minimum bathrooms"),
            ParamDescriptor::optional("baths_max", ParamKind::String, "Maximum bathrooms"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("property_type_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: condo|coop|condop. For NYC listings only"),
            ParamDescriptor::optional("new_construction", ParamKind::String, "true for New construction only. Leave blank for any"),
            ParamDescriptor::optional("hide_pending_contingent", ParamKind::String, "true for hide pending/contingent. Leave blank for any"),
            ParamDescriptor::optional("has_virtual_tours", ParamKind::String, "true for properties with virtual tour only. Leave blank for any"),
            ParamDescriptor::optional("has_3d_tours", ParamKind::String, "true for properties with 3D tour only. Leave blank for any"),
            ParamDescriptor::optional("hide_foreclosure", ParamKind::String, "true for hide foreclosure. Leave blank for any"),
            ParamDescriptor::optional("price_reduced", ParamKind::String, "true for properties with price reduced only. Leave blank for any"),
            ParamDescriptor::optional("open_house", ParamKind::String, "true for properties with open house only. Leave blank for any"),
            ParamDescriptor::optional("keywords", ParamKind::String, "Comma separated values. Get popular keywords from /keywords-search-suggest response"),
            ParamDescriptor::optional("no_hoa_fee", ParamKind::String, "true for properties without HOA fee only. Leave blank for any"),
            ParamDescriptor::optional("hoa_max", ParamKind::String, "Maximum HOA fee in USD"),
            ParamDescriptor::optional("days_on_realtor", ParamKind::String, "One of the following options: today|7|14|21|30"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::String, "One of the following options: 1|5|10|25|50. Expand search by radius in miles"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-sale-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::String, "One of the following options: 750|1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500. Minimum home size in sqft"),
            ParamDescriptor::optional("home_size_max", ParamKind::String, "One of the following options: 1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500|10000. Maximum home size in sqft"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
            ParamDescriptor::optional("stories", ParamKind::String, "One of the following options: single|multi"),
            ParamDescriptor::optional("garage", ParamKind::String, "One of the following options: 1+|2+|3+"),
            ParamDescriptor::optional("heating_cooling", ParamKind::String, "Comma separated values. One or more from following options: central_air|central_heat|forced_air"),
            ParamDescriptor::optional("inside_rooms", ParamKind::String, "Comma separated values. One or more comma separated from following options: basement|hardwood_floors|fireplace|disability_features|den_or_office|family_room|dining_room"),
            ParamDescriptor::optional("outside_features", ParamKind::String, "Comma separated values. One or more from following options: swimming_pool|spa_or_hot_tub|horse_facilities"),
            ParamDescriptor::optional("lot_views", ParamKind::String, "Comma separated values. One or more from following options: waterfront|cul_de_sac|corner_lot|golf_course_lot_or_frontage|hill_or_mountain_view|ocean_view|lake_view|river_view"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: community_swimming_pool|community_spa_or_hot_tub|community_golf|community_security_features|community_boat_facilities|tennis_court|community_clubhouse|senior_community"),
            ParamDescriptor::optional("features_in_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: furniture|dishwasher|community_doorman|pets_allowed|laundry_room|elevator|community_outdoor_space"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_for_sale_result_count",
        "v2/for-sale-result-count",
        "Get for-sale search result count. **Parameters**: `city, state_code, location, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, property_type_nyc_only, new_construction, hide_pending_contingent, has_virtual_tours, has_3d_tours, hide_foreclosure, price_reduced, open_house, keywords, no_hoa_fee, hoa_max, days_on_realtor, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max, stories, garage, heating_cooling, inside_rooms, outside_features, lot_views, community_ammenities, features_in_nyc_only`",
        &[
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::String, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank"),
            ParamDescriptor::optional("price_min", ParamKind::String, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::String, "Maximum list price in USD"),
            ParamDescriptor::optional("beds_min", ParamKind::String, "Minimum bedrooms"),
            ParamDescriptor::optional("beds_max", ParamKind::String, "Maximum bedrooms"),
            ParamDescriptor::optional("baths_min", ParamKind::String, "Minimum bathrooms"),
            ParamDescriptor::optional("baths_max", ParamKind::String, "Maximum bathrooms"),
            ParamDescriptor::optional("property_type_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: condo|coop|condop. For NYC listings only"),
            ParamDescriptor::optional("new_construction", ParamKind::String, "true for New construction only. Leave blank for any"),
            ParamDescriptor::optional("hide_pending_contingent", ParamKind::String, "true for hide pending/contingent. Leave blank for any"),
            ParamDescriptor::optional("has_virtual_tours", ParamKind::String, "true for properties with virtual tour only. Leave blank for any"),
            ParamDescriptor::optional("has_3d_tours", ParamKind::String, "true for properties with 3D tour only. Leave blank for any"),
            ParamDescriptor::optional("hide_foreclosure", ParamKind::String, "true for hide foreclosure. Leave blank for any"),
            ParamDescriptor::optional("price_reduced", ParamKind::String, "true for properties with price reduced only. Leave blank for any"),
            ParamDescriptor::optional("open_house", ParamKind::String, "true for properties with open house only. Leave blank for any"),
            ParamDescriptor::optional("keywords", ParamKind::String, "Comma separated values. Get popular keywords from /keywords-search-suggest response"),
            ParamDescriptor::optional("no_hoa_fee", ParamKind::String, "true for properties without HOA fee only. Leave blank for any"),
            ParamDescriptor::optional("hoa_max", ParamKind::String, "Maximum HOA fee in USD"),
            ParamDescriptor::optional("days_on_realtor", ParamKind::String, "One of the following options: today|7|14|21|30"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::String, "One of the following options: 1|5|10|25|50. Expand search by radius in miles"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-sale-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::String, "One of the following options: 750|1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500. Minimum home size in sqft"),
            ParamDescriptor::optional("home_size_max", ParamKind::String, "One of the following options: 1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500|10000. Maximum home size in sqft"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
            ParamDescriptor::optional("stories", ParamKind::String, "One of the following options: single|multi"),
            ParamDescriptor::optional("garage", ParamKind::String, "One of the following options: 1+|2+|3+"),
            ParamDescriptor::optional("heating_cooling", ParamKind::String, "Comma separated values. One or more from following options: central_air|central_heat|forced_air"),
            ParamDescriptor::optional("inside_rooms", ParamKind::String, "Comma separated values. One or more comma separated from following options: basement|hardwood_floors|fireplace|disability_features|den_or_office|family_room|dining_room"),
            ParamDescriptor::optional("outside_features", ParamKind::String, "Comma separated values. One or more from following options: swimming_pool|spa_or_hot_tub|horse_facilities"),
            ParamDescriptor::optional("lot_views", ParamKind::String, "Comma separated values. One or more from following options: waterfront|cul_de_sac|corner_lot|golf_course_lot_or_frontage|hill_or_mountain_view|ocean_view|lake_view|river_view"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: community_swimming_pool|community_spa_or_hot_tub|community_golf|community_security_features|community_boat_facilities|tennis_court|community_clubhouse|senior_community"),
            ParamDescriptor::optional("features_in_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: furniture|dishwasher|community_doorman|pets_allowed|laundry_room|elevator|community_outdoor_space"),
        ],
    ),
    EndpointDescriptor::get(
        "for_sale",
        "for-sale",
        "Search for-sale properties. **Parameters**: `city, state_code, location, limit, offset, sort:newest price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, property_type_nyc_only, new_construction, hide_pending_contingent, has_virtual_tours, has_3d_tours, hide_foreclosure, price_reduced, open_house, keywords, no_hoa_fee, hoa_max, days_on_realtor, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max, stories, garage, heating_cooling, inside_rooms, outside_features, lot_views, community_ammenities, features_in_nyc_only`",
        &[
            ParamDescriptor::required("offset", ParamKind::Float, "Offset results, default 0. Maximum 9800. Default: 0")
                .with_default("0"),
            ParamDescriptor::required("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 42")
                .with_default("42"),
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::String, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: relevant|newest|lowest_price|highest_price|open_house_date|price_reduced_date|largest_sqft|lot_size|sold_date. Default is relevant"),
            ParamDescriptor::optional("price_min", ParamKind::String, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::String, "Maximum list price in USD"),
            ParamDescriptor::optional("beds_min", ParamKind::String, "Minimum bedrooms"),
            ParamDescriptor::optional("beds_max", ParamKind::String, "Maximum bedrooms"),
            ParamDescriptor::optional("baths_min", ParamKind::String, "Minimum bathrooms"),
            ParamDescriptor::optional("baths_max", ParamKind::String, "Maximum bathrooms"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("property_type_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: condo|coop|condop. For NYC listings only"),
            ParamDescriptor::optional("new_construction", ParamKind::String, "true for New construction only. Leave blank for any"),
            ParamDescriptor::optional("hide_pending_contingent", ParamKind::String, "true for hide pending/contingent. Leave blank for any"),
            ParamDescriptor::optional("has_virtual_tours", ParamKind::String, "true for properties with virtual tour only. Leave blank for any"),
            ParamDescriptor::optional("has_3d_tours", ParamKind::String, "true for properties with 3D tour only. Leave blank for any"),
            ParamDescriptor::optional("hide_foreclosure", ParamKind::String, "true for hide foreclosure. Leave blank for any"),
            ParamDescriptor::optional("price_reduced", ParamKind::String, "true for properties with price reduced only. Leave blank for any"),
            ParamDescriptor::optional("open_house", ParamKind::String, "true for properties with open house only. Leave blank for any"),
            ParamDescriptor::optional("keywords", ParamKind::String, "Comma separated values. Get popular keywords from /keywords-search-suggest response"),
            ParamDescriptor::optional("no_hoa_fee", ParamKind::String, "true for properties without HOA fee only. Leave blank for any"),
            ParamDescriptor::optional("hoa_max", ParamKind::String, "Maximum HOA fee in USD"),
            ParamDescriptor::optional("days_on_realtor", ParamKind::String, "One of the following options: today|7|14|21|30"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::String, "One of the following options: 1|5|10|25|50. Expand search by radius in miles"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-sale-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::String, "One of the following options: 750|1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500. Minimum home size in sqft"),
            ParamDescriptor::optional("home_size_max", ParamKind::String, "One of the following options: 1000|1250|1500|1750|2000|2250|2500|2750|3000|3250|3500|3750|5000|7500|10000. Maximum home size in sqft"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
            ParamDescriptor::optional("stories", ParamKind::String, "One of the following options: single|multi"),
            ParamDescriptor::optional("garage", ParamKind::String, "One of the following options: 1+|2+|3+"),
            ParamDescriptor::optional("heating_cooling", ParamKind::String, "Comma separated values. One or more from following options: central_air|central_heat|forced_air"),
            ParamDescriptor::optional("inside_rooms", ParamKind::String, "Comma separated values. One or more comma separated from following options: basement|hardwood_floors|fireplace|disability_features|den_or_office|family_room|dining_room"),
            ParamDescriptor::optional("outside_features", ParamKind::String, "Comma separated values. One or more from following options: swimming_pool|spa_or_hot_tub|horse_facilities"),
            ParamDescriptor::optional("lot_views", ParamKind::String, "Comma separated values. One or more from following options: waterfront|cul_de_sac|corner_lot|golf_course_lot_or_frontage|hill_or_mountain_view|ocean_view|lake_view|river_view"),
            ParamDescriptor::optional("community_ammenities", ParamKind::String, "Comma separated values. One or more from following options: community_swimming_pool|community_spa_or_hot_tub|community_golf|community_security_features|community_boat_facilities|tennis_court|community_clubhouse|senior_community"),
            ParamDescriptor::optional("features_in_nyc_only", ParamKind::String, "Comma separated values. One or more from following options: furniture|dishwasher|community_doorman|pets_allowed|laundry_room|elevator|community_outdoor_space"),
        ],
    ),
    EndpointDescriptor::get(
        "for_sale_similiar_homes",
        "for-sale/similiar-homes",
        "Get similiar homes by `property_id`",
        &[
            ParamDescriptor::required("property_id", ParamKind::Float, "Default: 8624316600")
                .with_default("8624316600"),
        ],
    ),
    EndpointDescriptor::get(
        "for_sale_other_homes_in_building",
        "for-sale/other-homes-in-building",
        "Get other homes in same building by `property_id`",
        &[
            ParamDescriptor::required("property_id", ParamKind::Float, "Default: 9626941405")
                .with_default("9626941405"),
        ],
    ),
    EndpointDescriptor::get(
        "for_sale_home_estimate_value",
        "for-sale/home-estimate-value",
        "Get home estimate and historical values",
        &[
            ParamDescriptor::required("property_id", ParamKind::Float, "Default: 2061530895")
                .with_default("2061530895"),
        ],
    ),
    EndpointDescriptor::get(
        "v2_sold_homes_by_zipcode",
        "v2/sold-homes-by-zipcode",
        "Search for-sale properties. **Parameters**: `zipcode, limit, offset, sort, max_sold_days, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max`",
        &[
            ParamDescriptor::required("zipcode", ParamKind::Float, "zipcode Default: 37932")
                .with_default("37932"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: sold_date | lowest_price | highest_price | lot_size | number_of_beds. Default is sold_date"),
            ParamDescriptor::optional("max_sold_days", ParamKind::Float, "Maximum sold days form now"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::Float, "One of the following options: 1|5|10|25|50 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
        ],
    ),
    EndpointDescriptor::get(
        "sold_homes",
        "sold-homes",
        "Search for-sale properties. **Parameters**: `city, state_code, location, limit, offset, sort, max_sold_days, price_min, price_max, beds_min, beds_max, baths_min, baths_max, property_type, expand_search_radius, include_nearby_areas_slug_id, home_size_min, home_size_max, lot_size_min, lot_size_max, home_age_max`",
        &[
            ParamDescriptor::required("state_code", ParamKind::String, "State Code. Get from /location/suggest response"),
            ParamDescriptor::required("city", ParamKind::String, "City name. Get data from /location/suggest response"),
            ParamDescriptor::optional("location", ParamKind::Float, "Additional Location detail, could be neighborhood or postal_code or leave it blank. Get from /location/suggest response. Default is blank Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Number of results. Maximum 200 for Paid Plan, default 42 Default: 10")
                .with_default("10"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset results, default 0 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: sold_date | lowest_price | highest_price | lot_size | number_of_beds. Default is sold_date"),
            ParamDescriptor::optional("max_sold_days", ParamKind::Float, "Maximum sold days form now"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_min", ParamKind::Float, "Minimum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("beds_max", ParamKind::Float, "Maximum bedrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_min", ParamKind::Float, "Minimum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("baths_max", ParamKind::Float, "Maximum bathrooms Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("property_type", ParamKind::String, "Comma separated values. One or more from following options: multi_family|single_family|mobile|land|farm"),
            ParamDescriptor::optional("expand_search_radius", ParamKind::Float, "One of the following options: 1|5|10|25|50 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("include_nearby_areas_slug_id", ParamKind::String, "Comma separated values. Expand search by including nearby areas. Get slug_id from /location/for-rent-nearby-areas"),
            ParamDescriptor::optional("home_size_min", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("home_size_max", ParamKind::Float, "One of the following options: 500|750|1000|1250|1500|1750|2000|2250|2500|2750|3000 Default: 0")
                .with_default("0"),
            ParamDescriptor::optional("lot_size_min", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Minimum lot size in sqft"),
            ParamDescriptor::optional("lot_size_max", ParamKind::String, "One of the following options: 2000|300|4000|5000|7500|10890|21780|43560|87120|217800|435600|653400|871200. Maximum lot size in sqft"),
            ParamDescriptor::optional("home_age_max", ParamKind::String, "Maximum home age"),
        ],
    ),
];
