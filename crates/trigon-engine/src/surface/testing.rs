//! Display-free `Surface` for unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{BootstrapError, Result};
use crate::gl::testing::RecordingGl;

use super::Surface;

pub(crate) struct FakeSurface {
    pub gl: Rc<RecordingGl>,
    pub size: Cell<(u32, u32)>,
    pub presents: Rc<Cell<u32>>,
    pub redraw_requests: Rc<Cell<u32>>,
    pub fail_present: bool,
}

impl FakeSurface {
    pub fn new(gl: Rc<RecordingGl>, width: u32, height: u32) -> Self {
        Self {
            gl,
            size: Cell::new((width, height)),
            presents: Rc::default(),
            redraw_requests: Rc::default(),
            fail_present: false,
        }
    }
}

impl Surface for FakeSurface {
    type Gl = RecordingGl;

    fn gl(&self) -> &Rc<RecordingGl> {
        &self.gl
    }

    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn resize(&self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size.set((width, height));
        }
    }

    fn present(&self) -> Result<()> {
        if self.fail_present {
            return Err(BootstrapError::Present("surface lost".to_string()));
        }
        self.presents.set(self.presents.get() + 1);
        Ok(())
    }

    fn request_redraw(&self) {
        self.redraw_requests.set(self.redraw_requests.get() + 1);
    }
}
