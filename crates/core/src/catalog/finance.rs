//! Mortgage and rate figures.

use crate::schema::{EndpointDescriptor, ParamDescriptor, ParamKind};

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor::get(
        "finance_mortgage_calculate",
        "finance/mortgage-calculate",
        "Mortgage calculae",
        &[
            ParamDescriptor::required("show_amortization", ParamKind::Boolean, ""),
            ParamDescriptor::required("hoa_fees", ParamKind::Float, "Default: 0")
                .with_default("0"),
            ParamDescriptor::required("percent_tax_rate", ParamKind::Float, "Default: 0.5110091743119266")
                .with_default("0.5110091743119266"),
            ParamDescriptor::required("year_term", ParamKind::Float, "Default: 30")
                .with_default("30"),
            ParamDescriptor::required("percent_rate", ParamKind::Float, "Default: 3.088")
                .with_default("3.088"),
            ParamDescriptor::required("down_payment", ParamKind::Float, "Default: 239800")
                .with_default("239800"),
            ParamDescriptor::required("monthly_home_insurance", ParamKind::Float, "Default: 416")
                .with_default("416"),
            ParamDescriptor::required("price", ParamKind::Float, "Default: 1300000")
                .with_default("1300000"),
        ],
    ),
    EndpointDescriptor::get(
        "finance_rate_trends",
        "finance/rate-trends",
        "Get current rate trends and historical rate trends",
        &[
            ParamDescriptor::required("is_refinance", ParamKind::Boolean, ""),
        ],
    ),
    EndpointDescriptor::get(
        "finance_average_rate",
        "finance/average-rate",
        "Get average rates data",
        &[
            ParamDescriptor::required("postal_code", ParamKind::Float, "Default: 10312")
                .with_default("10312"),
        ],
    ),
];
