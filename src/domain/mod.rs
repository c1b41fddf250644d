pub mod column_sum;
