//! Public API coverage for book sides and the order book

use depthbook::{BookSide, OrderBook, OrderBookError, PriceLevel, Side};

fn level(price: f64, quantity: f64) -> PriceLevel {
    PriceLevel::new(price, quantity).unwrap()
}

#[cfg(test)]
mod book_coverage_tests {
    use super::*;

    #[test]
    fn test_strict_add_surfaces_duplicate() {
        let mut side = BookSide::new(Side::Buy);
        side.add(level(10.0, 1.0)).unwrap();

        let err = side.add(level(10.0, 2.0)).unwrap_err();
        assert!(matches!(err, OrderBookError::DuplicateKey { .. }));
        assert_eq!(err.to_string(), "Duplicate key: BUY level at 10 already exists");
    }

    #[test]
    fn test_price_equality_is_exact_for_keys() {
        let mut side = BookSide::new(Side::Sell);
        side.add(level(10.0, 1.0)).unwrap();

        // within PriceLevel's epsilon, but a different price key
        side.add(level(10.000000001, 1.0)).unwrap();
        assert_eq!(side.len(), 2);
        assert_eq!(side.best_price().unwrap().price(), 10.0);
    }

    #[test]
    fn test_empty_book_error_message() {
        let book = OrderBook::new(None);
        let err = book.best_ask().unwrap_err();
        assert_eq!(err.to_string(), "Empty book: no SELL levels");
    }

    #[test]
    fn test_invalid_value_never_enters_book() {
        let err = PriceLevel::new(10.0, -3.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for quantity: -3");
    }

    #[test]
    fn test_side_get_and_contains() {
        let mut side = BookSide::with_capacity(Side::Sell, 16);
        side.update_or_insert(level(2.5, 4.0));

        assert!(side.contains(2.5));
        assert_eq!(side.get(2.5).unwrap().quantity(), 4.0);
        assert_eq!(side.get(3.0), None);
    }

    #[test]
    fn test_sides_are_independent() {
        let mut book = OrderBook::new(None);
        book.apply_level(Side::Buy, level(100.0, 1.0));
        book.apply_level(Side::Sell, level(100.0, 2.0));

        book.apply_level(Side::Sell, level(100.0, 0.0));

        assert_eq!(book.best_bid().unwrap().quantity(), 1.0);
        assert!(book.best_ask().is_err());
    }

    #[test]
    fn test_crossed_levels_are_accepted() {
        // the core keeps no cross-side invariant
        let mut book = OrderBook::new(None);
        book.apply_level(Side::Buy, level(105.0, 1.0));
        book.apply_level(Side::Sell, level(100.0, 1.0));

        assert_eq!(book.spread(), Some(-5.0));
    }
}
