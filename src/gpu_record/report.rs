//! Human-readable info block for a GPU record.

use std::io::{self, Write};

use crate::model::Gpu;

/// Release dates are shown as `dd.mm.yyyy`.
const SHORT_DATE: &str = "%d.%m.%Y";

impl Gpu {
    /// Renders the multi-line info block, one newline-terminated line per field.
    pub fn info_report(&self) -> String {
        let basket = if self.in_basket() {
            "Відеокарта знаходиться в кошику"
        } else {
            "Відеокарта не знаходиться в кошику"
        };
        format!(
            "Модель: {}\n\
             GPU Clock: {} МГц\n\
             Архітектура: {}\n\
             Пам'ять: {} ГБ\n\
             Розрядність шини: {} біт\n\
             Дата випуску: {}\n\
             Ціна на релізі: {} $\n\
             {}\n",
            self.model_name(),
            self.gpu_clock(),
            self.architecture(),
            self.memory_size(),
            self.memory_bus_width(),
            self.release_date().format(SHORT_DATE),
            self.launch_price(),
            basket,
        )
    }

    /// Writes [`Gpu::info_report`] to stdout.
    pub fn print_info(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.info_report().as_bytes())?;
        stdout.flush()
    }
}
