impl<'a, M> FolioApp<'a, M>
where
    M: TextMeasure,
{
    /// Applies one button press.
    ///
    /// A render is requested iff the navigation state changed.
    pub fn handle_button(&mut self, button: ButtonId) -> ButtonOutcome<'a> {
        let before = self.nav;

        let notice = match self.nav.mode {
            UiMode::Intro => {
                self.apply_intro_input(button);
                None
            }
            UiMode::Pages => self.apply_pages_input(button),
        };

        if let Some(notice) = notice {
            log_notice(&notice);
        }

        let render = if self.nav != before {
            self.pending_redraw = true;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        ButtonOutcome { render, notice }
    }

    /// Drains `input` and applies every queued press.
    pub fn drain_input<IN>(&mut self, input: &mut IN) -> TickResult
    where
        IN: InputProvider,
    {
        let mut result = TickResult::NoRender;

        loop {
            match input.poll_event() {
                Ok(Some(button)) => {
                    if self.handle_button(button).needs_render() {
                        result = TickResult::RenderRequested;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, dropping the rest of this frame's events");
                    break;
                }
            }
        }

        result
    }

    fn apply_intro_input(&mut self, button: ButtonId) {
        match button {
            ButtonId::A | ButtonId::Start => {
                debug!("ui-nav: intro confirmed by {}", button);
                self.nav.page = Page::Home;
                self.nav.mode = UiMode::Pages;
            }
            _ => debug!("ui-nav: intro ignored {}", button),
        }
    }

    fn apply_pages_input(&mut self, button: ButtonId) -> Option<Notice<'a>> {
        match button {
            ButtonId::Right => {
                self.enter_page(self.nav.page.next());
                None
            }
            ButtonId::Left => {
                self.enter_page(self.nav.page.previous());
                None
            }
            ButtonId::Up => {
                self.move_selection(false);
                None
            }
            ButtonId::Down => {
                self.move_selection(true);
                None
            }
            ButtonId::A => self.confirm_selection(),
            ButtonId::B => {
                self.cancel();
                None
            }
            ButtonId::X | ButtonId::Y | ButtonId::Start | ButtonId::Select => {
                Some(Notice::Unhandled {
                    button,
                    page: self.nav.page,
                })
            }
        }
    }

    fn move_selection(&mut self, down: bool) {
        match self.nav.page {
            Page::Home => {}
            Page::Projects => self.step_project(down),
            Page::About => self.step_about(down),
            Page::Contact => match self.nav.contact_mode {
                ContactMode::List => self.step_contact(down),
                ContactMode::Typing => {
                    debug!("ui-nav: contact typing ignores vertical input")
                }
            },
        }
    }

    fn confirm_selection(&mut self) -> Option<Notice<'a>> {
        match (self.nav.page, self.nav.contact_mode) {
            (Page::Projects, _) => self
                .catalog
                .project_at(self.nav.project_selected)
                .map(Notice::ProjectSelected),
            (Page::Contact, ContactMode::List) => {
                let entry = self.catalog.contact_at(self.nav.contact_selected)?;
                match entry.kind {
                    ContactKind::Message => {
                        debug!("ui-nav: contact composer opened from {}", entry.id);
                        self.nav.contact_mode = ContactMode::Typing;
                        None
                    }
                    ContactKind::Link => Some(Notice::ContactOpened(entry)),
                }
            }
            _ => None,
        }
    }

    fn cancel(&mut self) {
        if self.nav.page == Page::Contact && self.nav.contact_mode == ContactMode::Typing {
            debug!("ui-nav: contact composer closed");
            self.nav.contact_mode = ContactMode::List;
            return;
        }

        self.go_home();
    }
}

fn log_notice(notice: &Notice<'_>) {
    match notice {
        Notice::ProjectSelected(project) => {
            info!(
                "ui-nav: selected project id={} label={:?}",
                project.id, project.label
            );
        }
        Notice::ContactOpened(contact) => {
            info!("ui-nav: contact via {}: {}", contact.id, contact.value);
        }
        Notice::Unhandled { button, page } => {
            debug!("ui-nav: button {} unhandled on page={}", button, page.label());
        }
    }
}
