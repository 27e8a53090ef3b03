//! Agent directory.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "agents_agents_search_by_zipcode",
        "agents/agents-search-by-zipcode",
        "Search for agents, teams, and office by zip code",
        &[
            ParamDescriptor::required("zipcode", ParamKind::String, "Postal code. Required if search by postal_code only."),
            ParamDescriptor::optional("agent_name", ParamKind::String, "Agent name to search."),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: agent_rating_high|recent_activity_high|recommendations_count_high|for_sale_count_high|recently_sold_high"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Maximum is 20"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset. Default is 0"),
            ParamDescriptor::optional("recommendations_count_min", ParamKind::Float, "Minimum recommendations count. 1 to 10. Default is Any"),
            ParamDescriptor::optional("agent_rating_min", ParamKind::Float, "Minimum agent rating. 1 to 5. Default is Any."),
            ParamDescriptor::optional("types", ParamKind::String, "One of the following options: agent | team | office"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD"),
        ],
    ),
    EndpointDescriptor::get(
        "agents_agents_search",
        "agents/agents-search",
        "Search for agents, teams and office",
        &[
            ParamDescriptor::optional("state_code", ParamKind::String, "State code. Required if not search by postal_code."),
            ParamDescriptor::optional("city", ParamKind::String, "City name. Required if not search by postal_code."),
            ParamDescriptor::optional("postal_code", ParamKind::String, "Postal code. Required if search by postal_code only."),
            ParamDescriptor::optional("agent_name", ParamKind::String, "Agent name to search."),
            ParamDescriptor::optional("sort", ParamKind::String, "One of the following options: agent_rating_high|recent_activity_high|recommendations_count_high|for_sale_count_high|recently_sold_high"),
            ParamDescriptor::optional("limit", ParamKind::Float, "Maximum is 100"),
            ParamDescriptor::optional("offset", ParamKind::Float, "Offset. Default is 0"),
            ParamDescriptor::optional("recommendations_count_min", ParamKind::Float, "Minimum recommendations count. 1 to 10. Default is Any"),
            ParamDescriptor::optional("agent_rating_min", ParamKind::Float, "Minimum agent rating. 1 to 5. Default is Any."),
            ParamDescriptor::optional("types", ParamKind::String, "One of the following options: agent | team | office"),
            ParamDescriptor::optional("price_min", ParamKind::Float, "Minimum list price in USD"),
            ParamDescriptor::optional("price_max", ParamKind::Float, "Maximum list price in USD"),
        ],
    ),
    EndpointDescriptor::get(
        "agents_agent_profile",
        "agents/agent-profile",
        "Get Agent's profile by advertiser_id and nrds_id",
        &[
            ParamDescriptor::required("advertiser_id", ParamKind::String, ""),
            ParamDescriptor::optional("nrds_id", ParamKind::String, ""),
        ],
    ),
    EndpointDescriptor::get(
        "agents_agent_listings",
        "agents/agent-listings",
        "Get Agent's listings",
        &[
            ParamDescriptor::required("advertiser_id", ParamKind::String, ""),
            ParamDescriptor::optional("nrds_id", ParamKind::String, ""),
            ParamDescriptor::optional("page", ParamKind::String, ""),
        ],
    ),
];
