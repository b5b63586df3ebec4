/// Returns `Err($err)` from the enclosing function unless `$cond` holds.
#[macro_export]
macro_rules! check {
    ($ cond: expr, $ err: expr) => {
        {
            if !($cond) {
                return Err($err);
            }
        }
    };
}

/// Returns `Err($err)` from the enclosing function unless `$a == $b`.
#[macro_export]
macro_rules! check_eq {
    ( $ a : expr , $ b : expr , $ err : expr ) => { $crate::check!($a == $b, $err) };
}
