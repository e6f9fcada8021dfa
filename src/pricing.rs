pub const YEARLY_DISCOUNT_LABEL: &str = "-20%";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    #[default]
    Yearly,
}

impl BillingPeriod {
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn is_yearly(self) -> bool {
        matches!(self, Self::Yearly)
    }
}

#[derive(Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub icon: &'static str,
    pub tagline: &'static str,
    pub price_monthly: u32,
    pub price_yearly: u32,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

impl Plan {
    /// Per-month price in whole dollars for the chosen billing period.
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.price_monthly,
            BillingPeriod::Yearly => self.price_yearly,
        }
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Spark",
        icon: "✦",
        tagline: "For curious beginners",
        price_monthly: 0,
        price_yearly: 0,
        features: &[
            "50 notes per month",
            "5 AI explorations",
            "Basic flashcards",
            "Community support",
        ],
        cta: "Start free",
        popular: false,
    },
    Plan {
        name: "Nova",
        icon: "◉",
        tagline: "For serious learners",
        price_monthly: 19,
        price_yearly: 15,
        features: &[
            "Unlimited notes",
            "Unlimited explorations",
            "Advanced study tools",
            "Source integration",
            "Export anywhere",
            "Priority support",
        ],
        cta: "Start 14-day trial",
        popular: true,
    },
    Plan {
        name: "Galaxy",
        icon: "✧",
        tagline: "For teams",
        price_monthly: 49,
        price_yearly: 39,
        features: &[
            "Everything in Nova",
            "Team workspaces",
            "Shared knowledge bases",
            "Admin dashboard",
            "SSO & security",
            "Dedicated support",
        ],
        cta: "Contact sales",
        popular: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_is_the_default_and_toggles() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::Yearly.toggled(), BillingPeriod::Monthly);
        assert!(!BillingPeriod::Monthly.is_yearly());
    }

    #[test]
    fn price_follows_billing_period() {
        let nova = &PLANS[1];

        assert_eq!(nova.price(BillingPeriod::Monthly), 19);
        assert_eq!(nova.price(BillingPeriod::Yearly), 15);
    }

    #[test]
    fn yearly_never_costs_more_and_one_plan_is_popular() {
        assert!(PLANS.iter().all(|plan| plan.price_yearly <= plan.price_monthly));
        assert_eq!(PLANS.iter().filter(|plan| plan.popular).count(), 1);
    }
}
