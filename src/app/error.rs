use color_eyre::eyre::Error;

/// Shows the last recoverable error in a window until it's closed.
#[derive(Debug, Default)]
pub struct ErrorDialog {
    error: Option<Error>,
}

impl ErrorDialog {
    pub fn display_error(&mut self, error: impl Into<Error>) {
        let error = error.into();
        tracing::error!(?error);
        self.error = Some(error);
    }

    pub fn ok_or_display<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        Error: From<E>,
    {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.display_error(Error::from(error));
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.error = None;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some(error) = &self.error {
            let mut open1 = true;
            let mut open2 = true;

            egui::Window::new("Error")
                .movable(true)
                .open(&mut open1)
                .collapsible(false)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("error_message")
                        .show(ui, |ui| {
                            egui::Frame::new().inner_margin(5).show(ui, |ui| {
                                ui.label(format!("{error:#}"));
                            });
                        });

                    ui.separator();

                    ui.with_layout(egui::Layout::right_to_left(Default::default()), |ui| {
                        if ui.button("Close").clicked() {
                            open2 = false;
                        }
                    });
                });

            if !open1 || !open2 {
                self.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use super::*;

    #[test]
    fn it_keeps_the_last_error() {
        let mut dialog = ErrorDialog::default();
        assert!(dialog.error.is_none());

        let value = dialog.ok_or_display(Err::<(), _>(eyre!("first")));
        assert_eq!(value, None);
        dialog.display_error(eyre!("second"));
        assert_eq!(dialog.error.as_ref().unwrap().to_string(), "second");

        dialog.clear();
        assert!(dialog.error.is_none());
        assert_eq!(dialog.ok_or_display(Ok::<_, Error>(3)), Some(3));
    }
}
