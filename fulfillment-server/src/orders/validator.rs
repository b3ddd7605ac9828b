//! Amount validation using rust_decimal for precision
//!
//! Monetary fields travel as `f64` on the wire; every check here converts
//! to `Decimal` first so float noise cannot produce false rejections or
//! false acceptances around the 0.01 tolerance.

use rust_decimal::prelude::*;
use shared::order::{NewOrder, NewOrderItem, Order};

use super::engine::TransitionError;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount per field (1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
const MAX_QUANTITY: i32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), TransitionError> {
    if !value.is_finite() {
        return Err(TransitionError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

fn require_non_negative(value: f64, field_name: &str) -> Result<(), TransitionError> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(TransitionError::InvalidAmount(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(TransitionError::InvalidAmount(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Compare two monetary values within [`MONEY_TOLERANCE`]
#[inline]
fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= MONEY_TOLERANCE
}

/// Check the aggregate invariant:
/// `total == subtotal + delivery_fee - discount_amount` within tolerance,
/// all components finite, non-negative and within bounds.
pub fn validate_amounts(
    subtotal: f64,
    delivery_fee: f64,
    discount_amount: f64,
    total: f64,
) -> Result<(), TransitionError> {
    require_non_negative(subtotal, "subtotal")?;
    require_non_negative(delivery_fee, "delivery_fee")?;
    require_non_negative(discount_amount, "discount_amount")?;
    require_non_negative(total, "total")?;

    let expected = to_decimal(subtotal) + to_decimal(delivery_fee) - to_decimal(discount_amount);
    if !money_eq(to_decimal(total), expected) {
        return Err(TransitionError::InvalidAmount(format!(
            "total {} does not match subtotal {} + delivery_fee {} - discount_amount {}",
            total, subtotal, delivery_fee, discount_amount
        )));
    }
    Ok(())
}

/// Validate the stored amounts of an order before committing a transition
pub fn validate_order_amounts(order: &Order) -> Result<(), TransitionError> {
    validate_amounts(
        order.subtotal,
        order.delivery_fee,
        order.discount_amount,
        order.total,
    )
}

/// Validate a line item at placement
fn validate_item(item: &NewOrderItem) -> Result<(), TransitionError> {
    if item.quantity <= 0 {
        return Err(TransitionError::InvalidAmount(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(TransitionError::InvalidAmount(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    require_non_negative(item.unit_price, "unit_price")?;
    require_non_negative(item.total_price, "total_price")?;

    let expected = to_decimal(item.unit_price) * Decimal::from(item.quantity);
    if !money_eq(to_decimal(item.total_price), expected) {
        return Err(TransitionError::InvalidAmount(format!(
            "total_price {} does not match quantity {} x unit_price {}",
            item.total_price, item.quantity, item.unit_price
        )));
    }
    for addon in &item.addons {
        if addon.quantity <= 0 {
            return Err(TransitionError::InvalidAmount(format!(
                "addon quantity must be positive, got {}",
                addon.quantity
            )));
        }
    }
    Ok(())
}

/// Validate a placement request: at least one item, every line consistent,
/// subtotal equal to the sum of line totals, aggregate invariant holds.
pub fn validate_new_order(req: &NewOrder) -> Result<(), TransitionError> {
    if req.items.is_empty() {
        return Err(TransitionError::InvalidAmount(
            "order must contain at least one item".to_string(),
        ));
    }
    let mut items_total = Decimal::ZERO;
    for item in &req.items {
        validate_item(item)?;
        items_total += to_decimal(item.total_price);
    }
    if !money_eq(to_decimal(req.subtotal), items_total) {
        return Err(TransitionError::InvalidAmount(format!(
            "subtotal {} does not match sum of line totals {}",
            req.subtotal, items_total
        )));
    }
    validate_amounts(req.subtotal, req.delivery_fee, req.discount_amount, req.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{Customer, OrderAddon, OrderType, PaymentMethod};

    fn item(quantity: i32, unit_price: f64, total_price: f64) -> NewOrderItem {
        NewOrderItem {
            product_name: "Test Product".to_string(),
            quantity,
            unit_price,
            total_price,
            notes: None,
            addons: vec![],
        }
    }

    fn new_order(items: Vec<NewOrderItem>, subtotal: f64, total: f64) -> NewOrder {
        NewOrder {
            shop_id: "shop-1".to_string(),
            customer: Customer {
                name: "Test".to_string(),
                phone: "+34600000000".to_string(),
                email: None,
            },
            order_type: OrderType::Pickup,
            payment_method: PaymentMethod::Cash,
            items,
            subtotal,
            delivery_fee: 0.0,
            discount_amount: 0.0,
            total,
            delivery_address: None,
            delivery_instructions: None,
            notes: None,
            actor_id: "customer-1".to_string(),
        }
    }

    // ========== Aggregate invariant ==========

    #[test]
    fn test_valid_amounts() {
        assert!(validate_amounts(18.5, 2.5, 1.0, 20.0).is_ok());
        assert!(validate_amounts(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_total_within_tolerance_accepted() {
        // 0.01 off is still within tolerance
        assert!(validate_amounts(10.0, 0.0, 0.0, 10.01).is_ok());
        assert!(validate_amounts(10.0, 0.0, 0.0, 9.99).is_ok());
    }

    #[test]
    fn test_total_outside_tolerance_rejected() {
        let err = validate_amounts(10.0, 0.0, 0.0, 10.02).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidAmount(_)));
        // 10 + 2 - 1 = 11, not 12
        assert!(validate_amounts(10.0, 2.0, 1.0, 12.0).is_err());
        assert!(validate_amounts(10.0, 2.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_float_noise_does_not_reject() {
        // 0.1 + 0.2 style accumulation must not trip the check
        let subtotal = 0.1 + 0.2;
        assert!(validate_amounts(subtotal, 0.0, 0.0, 0.3).is_ok());
    }

    #[test]
    fn test_negative_components_rejected() {
        assert!(validate_amounts(-1.0, 0.0, 0.0, -1.0).is_err());
        assert!(validate_amounts(10.0, -2.0, 0.0, 8.0).is_err());
        assert!(validate_amounts(10.0, 0.0, -1.0, 11.0).is_err());
        assert!(validate_amounts(10.0, 0.0, 11.0, -1.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(validate_amounts(f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(validate_amounts(10.0, f64::INFINITY, 0.0, 10.0).is_err());
        assert!(validate_amounts(10.0, 0.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_bounds_rejected() {
        assert!(validate_amounts(2_000_000.0, 0.0, 0.0, 2_000_000.0).is_err());
    }

    // ========== Placement validation ==========

    #[test]
    fn test_valid_new_order() {
        let order = new_order(vec![item(2, 5.0, 10.0)], 10.0, 10.0);
        assert!(validate_new_order(&order).is_ok());
    }

    #[test]
    fn test_empty_items_rejected() {
        let order = new_order(vec![], 0.0, 0.0);
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn test_zero_or_negative_quantity_rejected() {
        let order = new_order(vec![item(0, 5.0, 0.0)], 0.0, 0.0);
        assert!(validate_new_order(&order).is_err());
        let order = new_order(vec![item(-1, 5.0, -5.0)], -5.0, -5.0);
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn test_quantity_bound_rejected() {
        let order = new_order(vec![item(10_000, 1.0, 10_000.0)], 10_000.0, 10_000.0);
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn test_line_total_mismatch_rejected() {
        let order = new_order(vec![item(2, 5.0, 11.0)], 11.0, 11.0);
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn test_subtotal_mismatch_rejected() {
        let order = new_order(vec![item(2, 5.0, 10.0)], 12.0, 12.0);
        assert!(validate_new_order(&order).is_err());
    }

    #[test]
    fn test_addon_quantity_rejected() {
        let mut bad = item(1, 5.0, 5.0);
        bad.addons.push(OrderAddon {
            addon_name: "Extra cheese".to_string(),
            quantity: 0,
        });
        let order = new_order(vec![bad], 5.0, 5.0);
        assert!(validate_new_order(&order).is_err());
    }
}
