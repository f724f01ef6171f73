//! Toolkit-independent projection of [`AppState`] into what the screen shows
//!
//! Every user-facing string on the checkout page is produced here. Renderers
//! (the ratatui view, the headless summary) only lay the strings out.

use checkout_core::{format_currency, PriceSummary};
use serde::Serialize;

use crate::state::{AppState, Focus};

pub const PAGE_HEADING: &str = "Checkout";
pub const PAGE_SUBHEADING: &str = "Complete tu reserva de vuelo";
pub const COUPON_HEADING: &str = "Código de Cupón";
pub const INPUT_PLACEHOLDER: &str = "Ingresa tu código";
pub const VALIDATE_LABEL: &str = "Validar";
pub const REMOVE_LABEL: &str = "Remover";
pub const CONFIRM_LABEL: &str = "Confirmar Reserva";
pub const AVAILABLE_HEADING: &str = "Cupones disponibles:";
pub const PRICE_HEADING: &str = "Resumen de Precio";
pub const FLIGHT_PRICE_LABEL: &str = "Precio del vuelo";
pub const TOTAL_LABEL: &str = "Total";

/// Everything rendered on the checkout screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutView {
    pub heading: String,
    pub subheading: String,
    pub coupon_heading: String,
    pub coupon: CouponSection,
    pub price: PricePanel,
    pub confirm_label: String,
    pub focus: FocusTarget,
}

/// Coupon area: the entry form, or the applied-coupon confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CouponSection {
    Form {
        input: String,
        placeholder: String,
        validate_label: String,
        error: Option<String>,
        /// `None` when the hint list is disabled in settings
        available: Option<AvailableCoupons>,
    },
    Applied {
        /// "Cupón aplicado: SAVE10"
        title: String,
        /// "Descuento del 10%"
        detail: String,
        remove_label: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableCoupons {
    pub heading: String,
    /// "SAVE10 (10%)", ...
    pub codes: Vec<String>,
}

/// Price summary panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePanel {
    pub heading: String,
    pub flight_label: String,
    pub flight_price: String,
    /// ("Descuento (SAVE10)", "-$30.00") when a coupon is applied
    pub discount_line: Option<(String, String)>,
    pub total_label: String,
    /// Original price shown struck through above the total
    pub strikethrough: Option<String>,
    pub total: String,
    /// "Ahorras $30.00"
    pub savings_badge: Option<String>,
}

/// Serializable mirror of [`Focus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    Input,
    Validate,
    Remove,
    Confirm,
}

impl From<Focus> for FocusTarget {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Input => FocusTarget::Input,
            Focus::Validate => FocusTarget::Validate,
            Focus::Remove => FocusTarget::Remove,
            Focus::Confirm => FocusTarget::Confirm,
        }
    }
}

impl CheckoutView {
    /// Project application state into the screen model
    pub fn project(state: &AppState) -> Self {
        let checkout = &state.checkout;
        let summary = checkout.price_summary();

        let coupon = match checkout.applied_coupon() {
            Some(applied) => CouponSection::Applied {
                title: format!("Cupón aplicado: {}", applied.code),
                detail: format!("Descuento del {}%", applied.percent()),
                remove_label: REMOVE_LABEL.to_string(),
            },
            None => CouponSection::Form {
                input: checkout.input.clone(),
                placeholder: INPUT_PLACEHOLDER.to_string(),
                validate_label: VALIDATE_LABEL.to_string(),
                error: checkout.error_message(),
                available: state
                    .settings
                    .ui
                    .show_available_coupons
                    .then(|| AvailableCoupons {
                        heading: AVAILABLE_HEADING.to_string(),
                        codes: checkout.catalog().iter().map(|c| c.label()).collect(),
                    }),
            },
        };

        let code = checkout.applied_coupon_code();
        let price = PricePanel::project(&summary, code);

        Self {
            heading: PAGE_HEADING.to_string(),
            subheading: PAGE_SUBHEADING.to_string(),
            coupon_heading: COUPON_HEADING.to_string(),
            coupon,
            price,
            confirm_label: CONFIRM_LABEL.to_string(),
            focus: state.focus.into(),
        }
    }

    pub fn is_coupon_applied(&self) -> bool {
        matches!(self.coupon, CouponSection::Applied { .. })
    }

    /// Every visible string, in reading order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = vec![
            self.heading.as_str(),
            self.subheading.as_str(),
            self.coupon_heading.as_str(),
        ];
        match &self.coupon {
            CouponSection::Form {
                input,
                placeholder,
                validate_label,
                error,
                available,
            } => {
                out.push(if input.is_empty() { placeholder } else { input });
                out.push(validate_label);
                if let Some(error) = error {
                    out.push(error);
                }
                if let Some(available) = available {
                    out.push(&available.heading);
                    out.extend(available.codes.iter().map(String::as_str));
                }
            }
            CouponSection::Applied {
                title,
                detail,
                remove_label,
            } => {
                out.push(title);
                out.push(detail);
                out.push(remove_label);
            }
        }
        let price = &self.price;
        out.push(&price.heading);
        out.push(&price.flight_label);
        out.push(&price.flight_price);
        if let Some((label, amount)) = &price.discount_line {
            out.push(label);
            out.push(amount);
        }
        out.push(&price.total_label);
        if let Some(strike) = &price.strikethrough {
            out.push(strike);
        }
        out.push(&price.total);
        if let Some(badge) = &price.savings_badge {
            out.push(badge);
        }
        out.push(&self.confirm_label);
        out
    }

    /// Whether any visible string equals `text`
    pub fn shows(&self, text: &str) -> bool {
        self.texts().iter().any(|t| *t == text)
    }
}

impl PricePanel {
    fn project(summary: &PriceSummary, code: Option<&str>) -> Self {
        let discounted = summary.has_discount().then_some(());
        Self {
            heading: PRICE_HEADING.to_string(),
            flight_label: FLIGHT_PRICE_LABEL.to_string(),
            flight_price: format_currency(summary.original),
            discount_line: discounted.and(code).map(|code| {
                (
                    format!("Descuento ({})", code),
                    format!("-{}", format_currency(summary.savings)),
                )
            }),
            total_label: TOTAL_LABEL.to_string(),
            strikethrough: discounted.map(|_| format_currency(summary.original)),
            total: format_currency(summary.discounted),
            savings_badge: discounted.map(|_| format!("Ahorras {}", format_currency(summary.savings))),
        }
    }
}
