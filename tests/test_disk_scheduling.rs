use livevm_sched::core::common::SimulationError;
use livevm_sched::core::disk_scheduling_algorithm::{
    disk_scheduling_algorithm_resolver, schedule_disk, DiskSchedulingAlgorithm,
};
use livevm_sched::core::disk_scheduling_algorithms::fcfs::Fcfs;
use livevm_sched::core::disk_scheduling_algorithms::sstf::Sstf;
use livevm_sched::extensions::input_generator::InputGenerator;
use livevm_sched::simulation::ClusterSimulation;
use livevm_sched::core::config::SimulationConfig;

const QUEUE: [u32; 8] = [98, 183, 37, 122, 14, 124, 65, 67];
const HEAD: u32 = 53;

#[test]
// FCFS visits requests in arrival order and just sums the jumps.
fn test_fcfs_reference_case() {
    let plan = Fcfs::new().schedule(&QUEUE, HEAD);
    assert_eq!(plan.order, QUEUE.to_vec());
    assert_eq!(plan.total_seek, 640);
}

#[test]
// SSTF always jumps to the nearest pending request.
fn test_sstf_reference_case() {
    let plan = Sstf::new().schedule(&QUEUE, HEAD);
    assert_eq!(plan.order, vec![65, 67, 37, 14, 98, 122, 124, 183]);
    assert_eq!(plan.total_seek, 236);
}

#[test]
// Greedy nearest-neighbor does not lose to arrival order on these queues.
fn test_sstf_not_worse_than_fcfs() {
    let queues: Vec<(Vec<u32>, u32)> = vec![
        (QUEUE.to_vec(), HEAD),
        (vec![176, 79, 34, 60, 92, 11, 41, 114], 50),
        (vec![82, 170, 43, 140, 24, 16, 190], 100),
        (vec![0, 199], 100),
        (vec![55, 58, 39, 18, 90, 160, 150, 38, 184], 100),
    ];
    for (queue, head) in queues {
        let fcfs = Fcfs::new().schedule(&queue, head);
        let sstf = Sstf::new().schedule(&queue, head);
        assert!(sstf.total_seek <= fcfs.total_seek);
    }
}

#[test]
// Equidistant requests are resolved in favor of the smaller value.
fn test_sstf_tie_break() {
    let plan = Sstf::new().schedule(&[55, 45], 50);
    assert_eq!(plan.order, vec![45, 55]);
    assert_eq!(plan.total_seek, 15);
}

#[test]
fn test_empty_queue() {
    let fcfs = Fcfs::new().schedule(&[], 77);
    assert_eq!(fcfs.order, Vec::<u32>::new());
    assert_eq!(fcfs.total_seek, 0);

    let sstf = Sstf::new().schedule(&[], 77);
    assert_eq!(sstf.order, Vec::<u32>::new());
    assert_eq!(sstf.total_seek, 0);
}

#[test]
fn test_single_request() {
    let fcfs = Fcfs::new().schedule(&[120], 77);
    assert_eq!(fcfs.order, vec![120]);
    assert_eq!(fcfs.total_seek, 43);

    let sstf = Sstf::new().schedule(&[10], 77);
    assert_eq!(sstf.order, vec![10]);
    assert_eq!(sstf.total_seek, 67);
}

#[test]
// SSTF must work on a private copy and leave the caller's queue intact.
fn test_input_queue_not_mutated() {
    let queue = QUEUE.to_vec();
    Sstf::new().schedule(&queue, HEAD);
    assert_eq!(queue, QUEUE.to_vec());
}

#[test]
// Out-of-range positions are rejected before any computation.
fn test_out_of_range_inputs() {
    let sstf = Sstf::new();

    let result = schedule_disk(&sstf, &QUEUE, 200, 200);
    assert!(matches!(result, Err(SimulationError::InvalidInput(_))));

    let result = schedule_disk(&sstf, &[12, 200, 15], 53, 200);
    assert!(matches!(result, Err(SimulationError::InvalidInput(_))));

    let result = schedule_disk(&sstf, &QUEUE, HEAD, 200);
    assert!(result.is_ok());
}

#[test]
// Algorithms are resolved by name, same as placement algorithms.
fn test_algorithm_resolver() {
    let fcfs = disk_scheduling_algorithm_resolver("FCFS");
    let sstf = disk_scheduling_algorithm_resolver("SSTF");
    assert_eq!(fcfs.schedule(&QUEUE, HEAD).total_seek, 640);
    assert_eq!(sstf.schedule(&QUEUE, HEAD).total_seek, 236);
}

#[test]
// The tie-break policy can be flipped through resolver options.
fn test_sstf_tie_break_option() {
    let smaller = disk_scheduling_algorithm_resolver("SSTF[tie_break=smaller]");
    assert_eq!(smaller.schedule(&[55, 45], 50).order, vec![45, 55]);

    let larger = disk_scheduling_algorithm_resolver("SSTF[tie_break=larger]");
    let plan = larger.schedule(&[55, 45], 50);
    assert_eq!(plan.order, vec![55, 45]);
    assert_eq!(plan.total_seek, 15);
}

#[test]
// Generated demo inputs are in range, unique, and pass validation.
fn test_generated_inputs() {
    let mut generator = InputGenerator::new(42);
    let queue = generator.request_queue(8, 200);
    let head = generator.head_position(200);

    assert_eq!(queue.len(), 8);
    assert!(queue.iter().all(|&request| request < 200));
    let mut sorted = queue.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 8);
    assert!(head < 200);

    let fcfs = schedule_disk(&Fcfs::new(), &queue, head, 200).unwrap();
    let sstf = schedule_disk(&Sstf::new(), &queue, head, 200).unwrap();
    assert_eq!(fcfs.order, queue);
    assert_eq!(sstf.order.len(), queue.len());
    assert!(sstf.total_seek <= fcfs.total_seek);
}

#[test]
// The facade validates against the configured cylinder count.
fn test_schedule_disk_through_facade() {
    let mut sim = ClusterSimulation::new(SimulationConfig::new()).unwrap();

    let plan = sim.schedule_disk("SSTF", &QUEUE, HEAD).unwrap();
    assert_eq!(plan.order, vec![65, 67, 37, 14, 98, 122, 124, 183]);
    assert_eq!(plan.total_seek, 236);

    let result = sim.schedule_disk("FCFS", &QUEUE, 205);
    assert!(matches!(result, Err(SimulationError::InvalidInput(_))));
}
