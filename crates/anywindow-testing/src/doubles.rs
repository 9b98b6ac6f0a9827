use anywindow::{IntPoint, PositionSink, WindowError, WindowHost, WindowParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Position sink that records every applied position. Clones share the log,
/// so a test can keep a handle after moving the sink into a controller.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    applied: Rc<RefCell<Vec<IntPoint>>>,
    failing: Rc<Cell<bool>>,
    rejected: Rc<Cell<usize>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails and nothing is recorded.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn positions(&self) -> Vec<IntPoint> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<IntPoint> {
        self.applied.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.applied.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.borrow().is_empty()
    }

    /// Calls refused while failing.
    pub fn rejected(&self) -> usize {
        self.rejected.get()
    }

    pub fn clear(&self) {
        self.applied.borrow_mut().clear();
        self.rejected.set(0);
    }
}

impl PositionSink for RecordingSink {
    fn apply_position(&mut self, position: IntPoint) -> Result<(), WindowError> {
        if self.failing.get() {
            self.rejected.set(self.rejected.get() + 1);
            return Err(WindowError::Rejected("recording sink set to fail".into()));
        }
        self.applied.borrow_mut().push(position);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCall {
    Add(IntPoint),
    Update(IntPoint),
    Remove,
}

/// In-memory window host. Like a real window manager it refuses to add a
/// view twice or to touch a view it does not have.
#[derive(Debug, Default)]
pub struct FakeWindowHost {
    calls: Vec<HostCall>,
    fail_all: bool,
    has_view: bool,
    last_params: Option<WindowParams>,
}

impl FakeWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.fail_all = failing;
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Locations pushed through `update_view`, in order.
    pub fn updates(&self) -> Vec<IntPoint> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Update(position) => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn has_view(&self) -> bool {
        self.has_view
    }

    pub fn last_params(&self) -> Option<&WindowParams> {
        self.last_params.as_ref()
    }

    fn check(&self) -> Result<(), WindowError> {
        if self.fail_all {
            Err(WindowError::Rejected("fake host set to fail".into()))
        } else {
            Ok(())
        }
    }
}

impl WindowHost for FakeWindowHost {
    fn add_view(&mut self, params: &WindowParams) -> Result<(), WindowError> {
        self.check()?;
        if self.has_view {
            return Err(WindowError::AlreadyAttached);
        }
        self.has_view = true;
        self.calls.push(HostCall::Add(params.location));
        self.last_params = Some(params.clone());
        Ok(())
    }

    fn update_view(&mut self, params: &WindowParams) -> Result<(), WindowError> {
        self.check()?;
        if !self.has_view {
            return Err(WindowError::NotAttached);
        }
        self.calls.push(HostCall::Update(params.location));
        self.last_params = Some(params.clone());
        Ok(())
    }

    fn remove_view(&mut self) -> Result<(), WindowError> {
        self.check()?;
        if !self.has_view {
            return Err(WindowError::NotAttached);
        }
        self.has_view = false;
        self.calls.push(HostCall::Remove);
        Ok(())
    }
}
