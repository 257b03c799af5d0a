//! User-initiated mutations.
//!
//! Forms validate locally first; nothing is sent on a validation failure.
//! Mutations run as plain spawned tasks rather than in the request scope,
//! so leaving a screen never aborts a write halfway. Their results are
//! still tagged with the generation and dropped if the screen changed.

use std::future::Future;

use tracing::info;

use super::messages::{AppMessage, Outcome};
use super::views::{Alert, Confirm, PendingAction, View};
use super::App;
use crate::error::ClientError;
use crate::forms::{FormState, LeaveApplicant, PROFILE_NOT_FOUND};
use crate::helpers::period_label;
use crate::models::{LeaveStatus, PayrollStatus};
use crate::routes::Route;

impl App {
    /// The form on the current screen, if any.
    pub fn form_state(&self) -> Option<&FormState> {
        match &self.screen.view {
            View::Login(form) => Some(&form.state),
            View::Register(form) => Some(&form.state),
            View::EmployeeForm(form) => Some(&form.state),
            View::DepartmentForm(form) => Some(&form.state),
            View::JobRoleForm(form) => Some(&form.state),
            View::LeaveForm(view) => Some(&view.form.state),
            View::PayrollForm(form) => Some(&form.state),
            _ => None,
        }
    }

    pub fn form_state_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.screen.view {
            View::Login(form) => Some(&mut form.state),
            View::Register(form) => Some(&mut form.state),
            View::EmployeeForm(form) => Some(&mut form.state),
            View::DepartmentForm(form) => Some(&mut form.state),
            View::JobRoleForm(form) => Some(&mut form.state),
            View::LeaveForm(view) => Some(&mut view.form.state),
            View::PayrollForm(form) => Some(&mut form.state),
            _ => None,
        }
    }

    /// Run `task` and report its outcome against the current generation.
    fn spawn_action<F>(&self, task: F)
    where
        F: Future<Output = Result<Outcome, ClientError>> + Send + 'static,
    {
        let generation = self.scope.generation();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match task.await {
                Ok(outcome) => AppMessage::ActionSucceeded {
                    generation,
                    outcome,
                },
                Err(error) => AppMessage::ActionFailed { generation, error },
            };
            let _ = tx.send(message);
        });
    }

    /// Validate and submit the form on the current screen.
    pub fn submit(&mut self) {
        if self.form_state_mut().is_some_and(|form| form.submitting) {
            return;
        }
        let services = self.services.clone();
        let capabilities = self.capabilities();

        match &mut self.screen.view {
            View::Login(form) => match form.validate() {
                Ok(credentials) => {
                    form.state.submitting = true;
                    let session = self.session.clone();
                    let tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let message = match session.login(&credentials).await {
                            Ok(user) => AppMessage::SignedIn(user),
                            Err(error) => AppMessage::AuthFailed(error),
                        };
                        let _ = tx.send(message);
                    });
                }
                Err(error) => form.state.fail(error),
            },
            View::Register(form) => match form.validate() {
                Ok(data) => {
                    form.state.submitting = true;
                    let session = self.session.clone();
                    let tx = self.message_tx.clone();
                    tokio::spawn(async move {
                        let message = match session.register(&data).await {
                            Ok(user) => AppMessage::SignedIn(user),
                            Err(error) => AppMessage::AuthFailed(error),
                        };
                        let _ = tx.send(message);
                    });
                }
                Err(error) => form.state.fail(error),
            },
            View::EmployeeForm(form) => match form.validate() {
                Ok(payload) => {
                    form.state.submitting = true;
                    let editing = form.editing;
                    self.spawn_action(async move {
                        let notice = match editing {
                            Some(id) => {
                                services.employees.update(id, &payload).await?;
                                "Employee updated successfully"
                            }
                            None => {
                                services.employees.create(&payload).await?;
                                "Employee created successfully"
                            }
                        };
                        Ok(Outcome::Saved {
                            next: Route::Employees,
                            notice,
                        })
                    });
                }
                Err(error) => form.state.fail(error),
            },
            View::DepartmentForm(form) => match form.validate() {
                Ok(payload) => {
                    form.state.submitting = true;
                    let editing = form.editing;
                    self.spawn_action(async move {
                        let notice = match editing {
                            Some(id) => {
                                services.departments.update(id, &payload).await?;
                                "Department updated successfully"
                            }
                            None => {
                                services.departments.create(&payload).await?;
                                "Department created successfully"
                            }
                        };
                        Ok(Outcome::Saved {
                            next: Route::Departments,
                            notice,
                        })
                    });
                }
                Err(error) => form.state.fail(error),
            },
            View::JobRoleForm(form) => match form.validate() {
                Ok(payload) => {
                    form.state.submitting = true;
                    let editing = form.editing;
                    self.spawn_action(async move {
                        let notice = match editing {
                            Some(id) => {
                                services.job_roles.update(id, &payload).await?;
                                "Job role updated successfully"
                            }
                            None => {
                                services.job_roles.create(&payload).await?;
                                "Job role created successfully"
                            }
                        };
                        Ok(Outcome::Saved {
                            next: Route::JobRoles,
                            notice,
                        })
                    });
                }
                Err(error) => form.state.fail(error),
            },
            View::LeaveForm(view) => {
                let applicant = LeaveApplicant {
                    capabilities,
                    own_employee: view.own_employee.as_ref(),
                };
                match view.form.validate(applicant) {
                    Ok(request) => {
                        view.form.state.submitting = true;
                        self.spawn_action(async move {
                            services.leaves.create(&request).await?;
                            Ok(Outcome::Saved {
                                next: Route::Leaves,
                                notice: "Leave request submitted successfully",
                            })
                        });
                    }
                    Err(error) => view.form.state.fail(error),
                }
            }
            View::PayrollForm(form) => match form.validate() {
                Ok(payroll) => {
                    form.state.submitting = true;
                    self.spawn_action(async move {
                        services.payroll.create(&payroll).await?;
                        Ok(Outcome::Saved {
                            next: Route::Payroll,
                            notice: "Payroll generated successfully",
                        })
                    });
                }
                Err(error) => form.state.fail(error),
            },
            _ => {}
        }
        self.mark_dirty();
    }

    /// Ask before deleting the selected row.
    pub fn request_delete(&mut self) {
        let capabilities = self.capabilities();
        let confirm = match &self.screen.view {
            View::Employees(view) if capabilities.manage_employees => {
                view.rows().get(view.list.selected).map(|e| Confirm {
                    prompt: format!("Delete employee {}?", e.full_name()),
                    action: PendingAction::DeleteEmployee(e.employee_id),
                })
            }
            View::Departments(list) if capabilities.manage_departments => {
                list.visible().get(list.selected).map(|d| Confirm {
                    prompt: format!("Delete department {}?", d.department_name),
                    action: PendingAction::DeleteDepartment(d.department_id),
                })
            }
            View::JobRoles(list) if capabilities.manage_job_roles => {
                list.visible().get(list.selected).map(|r| Confirm {
                    prompt: format!("Delete job role {}?", r.job_title),
                    action: PendingAction::DeleteJobRole(r.job_id),
                })
            }
            // Employees may withdraw their own pending requests.
            View::Leaves(view) if !capabilities.view_all_leaves => view
                .rows()
                .get(view.list.selected)
                .filter(|l| l.status == LeaveStatus::Pending)
                .map(|l| Confirm {
                    prompt: "Are you sure you want to cancel this leave request?".to_string(),
                    action: PendingAction::CancelLeave(l.leave_id),
                }),
            _ => None,
        };
        if confirm.is_some() {
            self.confirm = confirm;
            self.mark_dirty();
        }
    }

    /// Ask before processing the selected or displayed payroll.
    pub fn request_process_payroll(&mut self) {
        if !self.capabilities().process_payroll {
            return;
        }
        let payroll = match &self.screen.view {
            View::Payrolls(view) => view.rows().get(view.list.selected).copied(),
            View::PayrollDetails(view) => view.payroll.as_ref(),
            _ => None,
        };
        let confirm = payroll
            .filter(|p| p.status == PayrollStatus::Pending)
            .map(|p| Confirm {
                prompt: format!("Process payroll for {}?", period_label(p.month, p.year)),
                action: PendingAction::ProcessPayroll(p.payroll_id),
            });
        if confirm.is_some() {
            self.confirm = confirm;
            self.mark_dirty();
        }
    }

    pub fn request_logout(&mut self) {
        if self.session.is_authenticated() {
            self.confirm = Some(Confirm {
                prompt: "Sign out of paydesk?".to_string(),
                action: PendingAction::Logout,
            });
            self.mark_dirty();
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
        self.mark_dirty();
    }

    /// Run the action the open dialog asked about.
    pub fn confirm_pending(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        self.mark_dirty();
        let services = self.services.clone();
        match confirm.action {
            PendingAction::DeleteEmployee(id) => self.spawn_action(async move {
                services.employees.delete(id).await?;
                Ok(Outcome::Deleted {
                    id,
                    notice: "Employee deleted successfully",
                })
            }),
            PendingAction::DeleteDepartment(id) => self.spawn_action(async move {
                services.departments.delete(id).await?;
                Ok(Outcome::Deleted {
                    id,
                    notice: "Department deleted successfully",
                })
            }),
            PendingAction::DeleteJobRole(id) => self.spawn_action(async move {
                services.job_roles.delete(id).await?;
                Ok(Outcome::Deleted {
                    id,
                    notice: "Job role deleted successfully",
                })
            }),
            PendingAction::CancelLeave(id) => self.spawn_action(async move {
                services.leaves.delete(id).await?;
                Ok(Outcome::Deleted {
                    id,
                    notice: "Leave request cancelled",
                })
            }),
            PendingAction::ProcessPayroll(id) => self.spawn_action(async move {
                services.payroll.process(id).await?;
                Ok(Outcome::PayrollProcessed { id })
            }),
            PendingAction::Logout => {
                let session = self.session.clone();
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    session.logout().await;
                    let _ = tx.send(AppMessage::SignedOut);
                });
            }
        }
    }

    /// Approve or reject the selected pending leave.
    pub fn decide_leave(&mut self, status: LeaveStatus) {
        let View::LeaveApproval(view) = &self.screen.view else {
            return;
        };
        let Some(id) = view.list.visible().get(view.list.selected).map(|l| l.leave_id) else {
            return;
        };
        let Some(processed_by) = view.approver.as_ref().map(|a| a.employee_id) else {
            self.alert = Some(Alert::error(PROFILE_NOT_FOUND));
            self.mark_dirty();
            return;
        };
        info!("Setting leave {} to {}", id, status.as_str());
        let services = self.services.clone();
        self.spawn_action(async move {
            services.leaves.update_status(id, status, processed_by).await?;
            Ok(Outcome::LeaveProcessed { id, status })
        });
    }
}
