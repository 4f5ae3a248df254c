extern crate std;

mod view;
