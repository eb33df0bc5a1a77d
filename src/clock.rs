use chrono::{DateTime, Local};

/// Timestamp layout used on every log line: date and time, no sub-second digits.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use parking_lot::Mutex;

    pub struct FakeClock {
        current: Mutex<DateTime<Local>>,
    }

    impl FakeClock {
        pub fn new(start: DateTime<Local>) -> Self {
            Self {
                current: Mutex::new(start),
            }
        }

        pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
            let start = Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .expect("unambiguous local time");
            Self::new(start)
        }

        pub fn advance(&self, duration: Duration) {
            let mut guard = self.current.lock();
            *guard += duration;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Local> {
            *self.current.lock()
        }
    }

    #[test]
    fn timestamp_has_no_sub_second_digits() {
        let clock = FakeClock::at(2024, 3, 9, 7, 5, 1);
        assert_eq!("2024/03/09 07:05:01", clock.timestamp());
    }

    #[test]
    fn fake_clock_advances() {
        let clock = FakeClock::at(2024, 3, 9, 23, 59, 59);
        clock.advance(Duration::seconds(2));
        assert_eq!("2024/03/10 00:00:01", clock.timestamp());
    }
}
