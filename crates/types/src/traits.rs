/// フィールド値の基盤となる trait。
///
/// - [`FieldValue`][]: フィールド値の統一インターフェース（加減算・スカラー倍・零元・ノルム・内積）
mod field_value;

pub use field_value::FieldValue;
