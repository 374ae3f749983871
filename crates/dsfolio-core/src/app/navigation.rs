impl<'a, M> FolioApp<'a, M>
where
    M: TextMeasure,
{
    fn enter_page(&mut self, page: Page) {
        debug!(
            "ui-nav: page {} -> {}",
            self.nav.page.label(),
            page.label()
        );
        self.nav.page = page;

        match page {
            Page::About => {
                self.nav.about_scroll = 0;
                self.about_wrap.invalidate();
                let max_start = self.about_max_start();
                debug!("ui-nav: about rewrapped max_start={}", max_start);
            }
            Page::Contact => self.nav.contact_mode = ContactMode::List,
            Page::Home | Page::Projects => {}
        }
    }

    fn go_home(&mut self) {
        debug!("ui-nav: return home from page={}", self.nav.page.label());
        self.nav.page = Page::Home;
        self.nav.about_scroll = 0;
        self.nav.contact_mode = ContactMode::List;
    }

    /// Moves the project cursor; the viewport follows so the selection stays visible.
    fn step_project(&mut self, down: bool) {
        let last = self.catalog.project_count().saturating_sub(1);
        let rows = self.config.project_rows as u16;
        let nav = &mut self.nav;

        if down {
            if nav.project_selected >= last {
                return;
            }
            nav.project_selected += 1;
            let last_visible = nav.project_viewport_start + rows - 1;
            if nav.project_selected > last_visible {
                nav.project_viewport_start = nav.project_selected - (rows - 1);
            }
        } else {
            if nav.project_selected == 0 {
                return;
            }
            nav.project_selected -= 1;
            if nav.project_selected < nav.project_viewport_start {
                nav.project_viewport_start = nav.project_selected;
            }
        }

        debug!(
            "ui-nav: project cursor={}/{} viewport_start={}",
            nav.project_selected.saturating_add(1),
            last.saturating_add(1),
            nav.project_viewport_start
        );
    }

    fn step_about(&mut self, down: bool) {
        if down {
            let max_start = self.about_max_start();
            if self.nav.about_scroll < max_start {
                self.nav.about_scroll += 1;
            }
        } else if self.nav.about_scroll > 0 {
            self.nav.about_scroll -= 1;
        }
    }

    fn step_contact(&mut self, down: bool) {
        let last = self.catalog.contact_count().saturating_sub(1);

        if down {
            if self.nav.contact_selected < last {
                self.nav.contact_selected += 1;
            }
        } else if self.nav.contact_selected > 0 {
            self.nav.contact_selected -= 1;
        }
    }
}

const fn rotate_cw(current: u8, total: u8) -> u8 {
    if total == 0 { 0 } else { (current + 1) % total }
}

const fn rotate_ccw(current: u8, total: u8) -> u8 {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
