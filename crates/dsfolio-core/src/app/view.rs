impl<'a, M> FolioApp<'a, M>
where
    M: TextMeasure,
{
    pub fn new(catalog: Catalog<'a>, mut config: NavConfig, metrics: TextMetrics<M>) -> Self {
        config.project_rows = config.project_rows.max(1);
        config.about_lines = config.about_lines.max(1);

        Self {
            catalog,
            config,
            metrics,
            nav: NavState::INITIAL,
            about_wrap: WrapCache::new(catalog.about),
            pending_redraw: true,
        }
    }

    pub fn mode(&self) -> UiMode {
        self.nav.mode
    }

    pub fn page(&self) -> Page {
        self.nav.page
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn config(&self) -> NavConfig {
        self.config
    }

    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Whether the current screen changes with time alone.
    pub fn animates(&self) -> bool {
        matches!(self.nav.mode, UiMode::Intro) || matches!(self.nav.page, Page::Home)
    }

    /// Largest valid About scroll index for the current wrap.
    pub fn about_max_start(&self) -> u16 {
        let total = self
            .about_wrap
            .line_count(self.metrics.max_width, &self.metrics.measure);
        total
            .saturating_sub(self.config.about_lines as usize)
            .min(u16::MAX as usize) as u16
    }

    /// Forces a mode. The new mode is painted on the next render.
    pub fn set_mode(&mut self, mode: UiMode) -> TickResult {
        if self.nav.mode == mode {
            return TickResult::NoRender;
        }

        debug!("ui-nav: set mode {:?} -> {:?}", self.nav.mode, mode);
        self.nav.mode = mode;
        self.pending_redraw = true;
        TickResult::RenderRequested
    }

    /// Adopts new wrap metrics, e.g. after the surface font or width changed.
    pub fn set_text_metrics(&mut self, metrics: TextMetrics<M>) -> TickResult {
        self.metrics = metrics;
        self.about_wrap.invalidate();

        let max_start = self.about_max_start();
        if self.nav.about_scroll > max_start {
            debug!(
                "ui-nav: about scroll clamped {} -> {} after metrics change",
                self.nav.about_scroll, max_start
            );
            self.nav.about_scroll = max_start;
        }

        self.pending_redraw = true;
        TickResult::RenderRequested
    }

    /// Called once per animation frame.
    ///
    /// Requests a render when a state change is still unpainted or when the
    /// current screen animates.
    pub fn tick(&mut self) -> TickResult {
        if self.pending_redraw {
            self.pending_redraw = false;
            return TickResult::RenderRequested;
        }

        if self.animates() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let catalog = &self.catalog;
        let nav = self.nav;

        if nav.mode == UiMode::Intro {
            f(Screen::Intro {
                owner: catalog.owner,
                headline: catalog.headline,
                tagline: catalog.tagline,
            });
            return;
        }

        let badge = PageBadge {
            number: nav.page.index() + 1,
            total: Page::COUNT,
        };

        match nav.page {
            Page::Home => f(Screen::Home {
                notes: catalog.home_notes,
                caption: catalog.avatar_caption,
            }),
            Page::Projects => {
                let last = catalog.projects.len().saturating_sub(1);
                f(Screen::Projects {
                    badge,
                    items: catalog.projects,
                    selected: (nav.project_selected as usize).min(last),
                    viewport_start: (nav.project_viewport_start as usize).min(last),
                    visible_rows: self.config.project_rows as usize,
                })
            }
            Page::About => {
                let visible = self.config.about_lines as usize;
                self.about_wrap.with_lines(
                    self.metrics.max_width,
                    &self.metrics.measure,
                    |lines| {
                        let start = (nav.about_scroll as usize).min(lines.len());
                        let end = (start + visible).min(lines.len());
                        f(Screen::About {
                            badge,
                            title: catalog.about_title,
                            lines: &lines[start..end],
                            more_above: start > 0,
                            more_below: end < lines.len(),
                        })
                    },
                );
            }
            Page::Contact => {
                let last = catalog.contacts.len().saturating_sub(1);
                f(Screen::Contact {
                    badge,
                    items: catalog.contacts,
                    selected: (nav.contact_selected as usize).min(last),
                    composing: nav.contact_mode == ContactMode::Typing,
                    recipient: catalog.message_recipient,
                    draft: catalog.message_draft,
                })
            }
        }
    }
}
