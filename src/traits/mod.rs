pub mod creatable;
