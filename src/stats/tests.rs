#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::structs::generation_clock::GenerationClock;
    use crate::tracker::structs::torrent_tracker::TorrentTracker;

    fn tracker() -> TorrentTracker {
        let mut config = Configuration::init();
        config.store.shard_bits = 2;
        TorrentTracker::with_clock(Arc::new(config), GenerationClock::manual(300, 1))
    }

    #[test]
    fn test_update_stats_adds_and_subtracts() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::Announces, 5);
        let stats = tracker.update_stats(StatsEvent::Announces, -2);
        assert_eq!(stats.announces, 3);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::ReapSweeps, 4);
        let stats = tracker.set_stats(StatsEvent::ReapSweeps, 1);
        assert_eq!(stats.reap_sweeps, 1);
    }

    #[test]
    fn test_started_is_set() {
        let stats = tracker().get_stats();
        assert!(stats.started > 0);
        assert_eq!(stats.swarms, 0);
        assert_eq!(stats.lock_stalls, 0);
    }

    #[test]
    fn test_every_event_has_its_own_counter() {
        let atomics = StatsAtomics::new();
        let events = [
            StatsEvent::TimestampReap, StatsEvent::TimestampConsole, StatsEvent::Swarms,
            StatsEvent::Seeds, StatsEvent::Peers, StatsEvent::Completed, StatsEvent::Announces,
            StatsEvent::Scrapes, StatsEvent::UpsertFailures, StatsEvent::ScansSubmitted,
            StatsEvent::ScansCompleted, StatsEvent::ScansCanceled, StatsEvent::ScansFailed, StatsEvent::ResultsDiscarded,
            StatsEvent::ReapSweeps, StatsEvent::SwarmsReaped, StatsEvent::PeersReaped,
        ];
        for (n, event) in events.iter().enumerate() {
            atomics.counter(*event).store(n as i64 + 1, std::sync::atomic::Ordering::SeqCst);
        }
        for (n, event) in events.iter().enumerate() {
            assert_eq!(atomics.counter(*event).load(std::sync::atomic::Ordering::SeqCst), n as i64 + 1);
        }
    }

    #[test]
    fn test_stats_serialize() {
        let json = serde_json::to_value(tracker().get_stats()).unwrap();
        assert!(json.get("announces").is_some());
        assert!(json.get("lock_violations").is_some());
    }
}
