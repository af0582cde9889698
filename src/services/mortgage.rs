/// Rounded amortization figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MortgagePlan {
    pub monthly_payment: u64,
    pub total_payment: u64,
    pub total_interest: u64,
}

pub const DEFAULT_DOWN_PAYMENT: f64 = 0.20;
pub const DEFAULT_RATE_PERCENT: f64 = 4.5;
pub const DEFAULT_YEARS: u32 = 25;

pub fn calculate_mortgage(principal: f64, annual_rate_percent: f64, years: u32) -> MortgagePlan {
    let payments = (years * 12) as f64;
    if payments == 0.0 {
        let p = principal.round().max(0.0) as u64;
        return MortgagePlan {
            monthly_payment: p,
            total_payment: p,
            total_interest: 0,
        };
    }

    let r = annual_rate_percent / 100.0 / 12.0;
    let monthly = if r == 0.0 {
        principal / payments
    } else {
        let growth = (1.0 + r).powf(payments);
        principal * (r * growth) / (growth - 1.0)
    };
    let total = monthly * payments;

    MortgagePlan {
        monthly_payment: monthly.round() as u64,
        total_payment: total.round() as u64,
        total_interest: (total - principal).round().max(0.0) as u64,
    }
}

/// Gross yield in percent.
pub fn calculate_roi(purchase_price: f64, annual_rent: f64) -> f64 {
    if purchase_price <= 0.0 {
        return 0.0;
    }
    annual_rent / purchase_price * 100.0
}

/// Financing on a listing at the default terms (20% down, 25 years, 4.5%).
pub fn default_plan(price: u64) -> (u64, MortgagePlan) {
    let down = (price as f64 * DEFAULT_DOWN_PAYMENT).round();
    let plan = calculate_mortgage(price as f64 - down, DEFAULT_RATE_PERCENT, DEFAULT_YEARS);
    (down as u64, plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_million_at_default_terms() {
        let (down, plan) = default_plan(2_000_000);
        assert_eq!(down, 400_000);
        // 1.6M over 25y at 4.5%
        assert_eq!(plan.monthly_payment, 8_893);
        assert_eq!(
            plan.total_interest,
            plan.total_payment - 1_600_000
        );
    }

    #[test]
    fn zero_rate_is_straight_division() {
        let plan = calculate_mortgage(120_000.0, 0.0, 10);
        assert_eq!(plan.monthly_payment, 1_000);
        assert_eq!(plan.total_interest, 0);
    }

    #[test]
    fn roi_percent() {
        assert!((calculate_roi(1_000_000.0, 70_000.0) - 7.0).abs() < 1e-9);
        assert_eq!(calculate_roi(0.0, 10.0), 0.0);
    }
}
