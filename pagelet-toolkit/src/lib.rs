pub mod js {
    pub mod dommanip;
}

pub mod console;
pub mod error;
pub mod url;

#[macro_export]
macro_rules! lock {
    ($x: expr) => {{
        match $x.lock() {
            Ok(v) => v,
            Err(_) => {
                panic!("PAGELET LOCK POISONED {}/{}/{}",file!(),line!(),column!());
            }
        }
    }}
}
