//! Statutory income types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of income a withholding line is paid under.
///
/// Codes follow Revenue Code section 40, plus the two business payment
/// categories with their own announced rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeType {
    /// 40(1) salary, wages, bonus.
    #[serde(rename = "40(1)")]
    Salary,
    /// 40(2) fees and commissions.
    #[serde(rename = "40(2)")]
    Commission,
    /// 40(3) royalties.
    #[serde(rename = "40(3)")]
    Royalty,
    /// 40(4)(a) interest.
    #[serde(rename = "40(4)(a)")]
    Interest,
    /// 40(4)(b) dividends.
    #[serde(rename = "40(4)(b)")]
    Dividend,
    /// 40(5) property rental.
    #[serde(rename = "40(5)")]
    Rent,
    /// 40(6) liberal professions.
    #[serde(rename = "40(6)")]
    ProfessionalFee,
    /// 40(7) contract work.
    #[serde(rename = "40(7)")]
    Contracting,
    /// 40(8) services and other business income.
    #[serde(rename = "40(8)")]
    Service,
    /// Advertising fees.
    #[serde(rename = "advertising")]
    Advertising,
    /// Transport fees.
    #[serde(rename = "transport")]
    Transport,
}

impl IncomeType {
    /// Every income type, in form order.
    pub const ALL: [Self; 11] = [
        Self::Salary,
        Self::Commission,
        Self::Royalty,
        Self::Interest,
        Self::Dividend,
        Self::Rent,
        Self::ProfessionalFee,
        Self::Contracting,
        Self::Service,
        Self::Advertising,
        Self::Transport,
    ];

    /// Code printed on the certificate.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Salary => "40(1)",
            Self::Commission => "40(2)",
            Self::Royalty => "40(3)",
            Self::Interest => "40(4)(a)",
            Self::Dividend => "40(4)(b)",
            Self::Rent => "40(5)",
            Self::ProfessionalFee => "40(6)",
            Self::Contracting => "40(7)",
            Self::Service => "40(8)",
            Self::Advertising => "advertising",
            Self::Transport => "transport",
        }
    }

    /// Thai label printed on the certificate.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Salary => "เงินเดือน ค่าจ้าง เบี้ยเลี้ยง โบนัส",
            Self::Commission => "ค่าธรรมเนียม ค่านายหน้า",
            Self::Royalty => "ค่าแห่งลิขสิทธิ์",
            Self::Interest => "ดอกเบี้ย",
            Self::Dividend => "เงินปันผล",
            Self::Rent => "ค่าเช่าทรัพย์สิน",
            Self::ProfessionalFee => "ค่าวิชาชีพอิสระ",
            Self::Contracting => "ค่ารับเหมา",
            Self::Service => "ค่าบริการ",
            Self::Advertising => "ค่าโฆษณา",
            Self::Transport => "ค่าขนส่ง",
        }
    }

    /// Default withholding rate (percent) filled in when the type is chosen.
    ///
    /// Salary is withheld at progressive rates, so its default is zero and
    /// the rate is entered per line.
    #[must_use]
    pub fn default_rate(self) -> Decimal {
        match self {
            Self::Salary => Decimal::ZERO,
            Self::Interest | Self::Transport => Decimal::ONE,
            Self::Advertising => Decimal::TWO,
            Self::Commission
            | Self::Royalty
            | Self::ProfessionalFee
            | Self::Contracting
            | Self::Service => Decimal::from(3),
            Self::Rent => Decimal::from(5),
            Self::Dividend => Decimal::TEN,
        }
    }
}

impl std::fmt::Display for IncomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.code() == wanted)
            .ok_or_else(|| format!("Unknown income type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(IncomeType::Salary, dec!(0))]
    #[case(IncomeType::Commission, dec!(3))]
    #[case(IncomeType::Royalty, dec!(3))]
    #[case(IncomeType::Interest, dec!(1))]
    #[case(IncomeType::Dividend, dec!(10))]
    #[case(IncomeType::Rent, dec!(5))]
    #[case(IncomeType::ProfessionalFee, dec!(3))]
    #[case(IncomeType::Contracting, dec!(3))]
    #[case(IncomeType::Service, dec!(3))]
    #[case(IncomeType::Advertising, dec!(2))]
    #[case(IncomeType::Transport, dec!(1))]
    fn test_default_rates(#[case] income_type: IncomeType, #[case] rate: Decimal) {
        assert_eq!(income_type.default_rate(), rate);
    }

    #[test]
    fn test_code_round_trips_through_from_str() {
        for income_type in IncomeType::ALL {
            assert_eq!(IncomeType::from_str(income_type.code()).unwrap(), income_type);
        }
        assert!(IncomeType::from_str("40(9)").is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(
            serde_json::to_string(&IncomeType::Interest).unwrap(),
            "\"40(4)(a)\""
        );
        let parsed: IncomeType = serde_json::from_str("\"40(8)\"").unwrap();
        assert_eq!(parsed, IncomeType::Service);
    }
}
