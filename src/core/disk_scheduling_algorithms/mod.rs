pub mod fcfs;
pub mod sstf;
