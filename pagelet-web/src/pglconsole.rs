use std::sync::{ Arc, Mutex };
use js_sys::Date;
use pagelet_toolkit::console::{ set_printer, Severity };
use pagelet_toolkit::lock;
use web_sys::console;

struct PglConsoleData {
    this_interval: f64,
    num_this_interval: u32,
    max_per_interval: u32,
    interval: f64
}

impl PglConsoleData {
    fn new(max_per_interval: u32, interval: f64) -> PglConsoleData {
        PglConsoleData {
            this_interval: 0.,
            num_this_interval: 0,
            max_per_interval,
            interval: interval * 1000.
        }
    }

    fn log(&self, severity: &Severity, msg: &str) {
        match severity {
            Severity::Notice => console::log_1(&msg.to_string().into()),
            Severity::Warning => console::warn_1(&msg.to_string().into()),
            Severity::Error => console::error_1(&msg.to_string().into())
        }
    }

    fn interval(&self, a: f64) -> f64 {
        (a/self.interval).floor()
    }

    fn suppress(&mut self) -> bool {
        let now = self.interval(Date::now());
        if now.floor() > self.this_interval.floor() {
            if self.num_this_interval > self.max_per_interval {
                self.log(&Severity::Notice,&format!("... and {} more messages in the last {}s",self.num_this_interval-self.max_per_interval,self.interval/1000.));
            }
            self.this_interval = now;
            self.num_this_interval = 0;
        }
        self.num_this_interval += 1;
        self.num_this_interval > self.max_per_interval
    }

    fn message(&mut self, severity: &Severity, msg: &str) {
        if !self.suppress() {
            self.log(severity,msg);
        }
    }
}

#[derive(Clone)]
struct PglConsoleWeb(Arc<Mutex<PglConsoleData>>);

impl PglConsoleWeb {
    fn new(max_per_interval: u32, interval: f64) -> PglConsoleWeb {
        PglConsoleWeb(Arc::new(Mutex::new(PglConsoleData::new(max_per_interval,interval))))
    }

    fn message(&self, severity: &Severity, msg: &str) {
        lock!(self.0).message(severity,msg);
    }
}

pub(crate) fn setup_console(max_per_interval: u32, interval: f64) {
    let console = PglConsoleWeb::new(max_per_interval,interval);
    set_printer(move |severity,message| console.message(severity,message));
}
