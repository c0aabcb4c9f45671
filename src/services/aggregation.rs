//! Agregações puras do dashboard.
//!
//! Cada função recebe um snapshot já materializado (e o instante `now`
//! quando depende do relógio) e devolve a estrutura pronta para o JSON.
//! Nada aqui toca o banco ou guarda estado entre chamadas.

pub mod cash_outflow;
pub mod category_spend;
pub mod monthly_volume;
pub mod overview;
pub mod vendor_concentration;

use rust_decimal::Decimal;

/// `part / total * 100`, ou zero quando o total é zero.
///
/// Totais com sinal podem quase se anular; se a razão estourar o `Decimal`,
/// o resultado satura em `Decimal::MAX`/`Decimal::MIN` conforme o sinal.
pub(crate) fn share_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == total.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(share_of(Decimal::from(5), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn share_of_is_a_percentage() {
        assert_eq!(share_of(Decimal::from(1), Decimal::from(4)), Decimal::from(25));
    }

    #[test]
    fn share_of_saturates_instead_of_overflowing() {
        let tiny = Decimal::new(1, 2); // 0.01
        let huge = Decimal::from_i128_with_scale(10i128.pow(26), 0);

        assert_eq!(share_of(huge, tiny), Decimal::MAX);
        assert_eq!(share_of(-huge, tiny), Decimal::MIN);
        assert_eq!(share_of(huge, -tiny), Decimal::MIN);
    }
}
